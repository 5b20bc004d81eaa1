//! Seed data for the session.
//!
//! Everything here is mock data loaded at startup; the catalog holds it
//! in memory for the duration of the session and nothing persists
//! across runs.

use super::{Project, StreamPlatform};

/// Canonical category list used by submission, filtering, and the AI
/// categorizer prompt
pub const CATEGORIES: &[&str] = &[
    "Web app",
    "Mobile app",
    "AI / Machine Learning",
    "Data visualization & analytics",
    "Backend / APIs & Integrations",
    "Developer tools & productivity",
    "DevOps, infra & automation",
    "Cloud / Edge computing",
    "Hardware, IoT & wearables",
    "Robotics & drones",
    "AR / VR / MR",
    "Games & interactive experiences",
    "Fintech & payments",
    "Healthtech & med devices",
    "Edtech & learning",
    "Sustainability & climate tech",
    "Social impact & civic tech",
    "Accessibility & inclusion",
    "Retail, ecommerce & marketplaces",
    "Logistics & supply chain",
    "Legaltech & compliance",
    "Open source & community projects",
    "Experimental / wild card",
];

/// Fallback category when the AI categorizer is unavailable or returns
/// something unusable
pub const FALLBACK_CATEGORY: &str = "Experimental or wild card";

/// The rubric outline document. A stable, versionable plain-text asset;
/// `hackcast init` writes it to `rubric.md` so organizers can edit it.
pub const RUBRIC_DOCUMENT: &str = "\
# Hackathon Rubric v1

## Presentation - 30
- Clarity of problem - 10
- Storytelling - 10
- Demo quality - 10

## Technical - 40
- Code quality - 10
- Architecture - 10
- Tests and reliability - 10
- Performance and security - 10

## Impact - 20
- User value - 10
- Market or community relevance - 10

## Polish - 10
- UI and UX - 5
- Documentation - 5
";

/// The mock project catalog
pub fn mock_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            team_name: "Streamweavers".to_string(),
            name: "Live Code Feedback".to_string(),
            tagline: "Real-time AI-powered code suggestions for streamers.".to_string(),
            description: "A VS Code extension that connects to your stream chat, allowing \
                viewers to suggest code changes that are then vetted by an AI before appearing \
                in your editor. Perfect for collaborative coding sessions."
                .to_string(),
            category_primary: "Developer tools & productivity".to_string(),
            category_secondary: vec!["AI / Machine Learning".to_string()],
            tech_tags: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Firebase".to_string(),
                "Gemini API".to_string(),
            ],
            stream_platform: StreamPlatform::Twitch,
            stream_url: "https://www.twitch.tv/some_user".to_string(),
            is_live: true,
            thumbnail: "https://picsum.photos/seed/project1/480/270".to_string(),
            viewer_count: 1450,
            repo_url: "https://github.com/example/live-code-feedback".to_string(),
            demo_url: "https://youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        },
        Project {
            id: "2".to_string(),
            team_name: "Data Dynamos".to_string(),
            name: "Global Climate Visualizer".to_string(),
            tagline: "Track climate change indicators on a 3D globe.".to_string(),
            description: "An interactive web application built with D3.js and WebGL to \
                visualize real-time and historical climate data from various public APIs. \
                Users can explore datasets like temperature anomalies, sea levels, and CO2 \
                concentrations."
                .to_string(),
            category_primary: "Data visualization & analytics".to_string(),
            category_secondary: vec!["Sustainability & climate tech".to_string()],
            tech_tags: vec!["D3.js".to_string(), "WebGL".to_string(), "Node.js".to_string()],
            stream_platform: StreamPlatform::YouTube,
            stream_url: "https://www.youtube.com/watch?v=some_video".to_string(),
            is_live: true,
            thumbnail: "https://picsum.photos/seed/project2/480/270".to_string(),
            viewer_count: 890,
            repo_url: "https://github.com/example/climate-visualizer".to_string(),
            demo_url: "https://youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        },
        Project {
            id: "3".to_string(),
            team_name: "Alex".to_string(),
            name: "AI Symptom Checker".to_string(),
            tagline: "An intelligent chatbot for preliminary health assessments.".to_string(),
            description: "A mobile app that uses a conversational AI to help users understand \
                their symptoms and provides information on potential conditions. It uses a \
                fine-tuned model for medical queries and advises users to consult \
                professionals."
                .to_string(),
            category_primary: "Healthtech & med devices".to_string(),
            category_secondary: vec![
                "AI / Machine Learning".to_string(),
                "Mobile app".to_string(),
            ],
            tech_tags: vec![
                "React Native".to_string(),
                "Gemini API".to_string(),
                "Express".to_string(),
            ],
            stream_platform: StreamPlatform::Twitch,
            stream_url: "https://www.twitch.tv/some_user".to_string(),
            is_live: false,
            thumbnail: "https://picsum.photos/seed/project3/480/270".to_string(),
            viewer_count: 0,
            repo_url: "https://github.com/example/symptom-checker".to_string(),
            demo_url: "https://youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        },
        Project {
            id: "4".to_string(),
            team_name: "Fintech Wizards".to_string(),
            name: "Decentralized Crowdfunding".to_string(),
            tagline: "A blockchain-based platform for transparent project funding.".to_string(),
            description: "Raising funds for creative projects using smart contracts on the \
                Ethereum blockchain. Contributors receive tokens that can represent shares or \
                grant voting rights on project milestones."
                .to_string(),
            category_primary: "Fintech & payments".to_string(),
            category_secondary: vec!["Web app".to_string()],
            tech_tags: vec![
                "Solidity".to_string(),
                "Next.js".to_string(),
                "Ethers.js".to_string(),
            ],
            stream_platform: StreamPlatform::YouTube,
            stream_url: "https://www.youtube.com/watch?v=some_video".to_string(),
            is_live: true,
            thumbnail: "https://picsum.photos/seed/project4/480/270".to_string(),
            viewer_count: 2100,
            repo_url: "https://github.com/example/decentralized-crowdfunding".to_string(),
            demo_url: "https://youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        },
        Project {
            id: "5".to_string(),
            team_name: "Game Changers".to_string(),
            name: "AR History Explorer".to_string(),
            tagline: "Walk through historical sites with augmented reality guides.".to_string(),
            description: "An AR mobile app that overlays historical information, photos, and \
                3D models onto real-world locations through your phone's camera. Discover the \
                stories behind landmarks as you explore."
                .to_string(),
            category_primary: "AR / VR / MR".to_string(),
            category_secondary: vec![
                "Mobile app".to_string(),
                "Edtech & learning".to_string(),
            ],
            tech_tags: vec!["Unity".to_string(), "ARKit".to_string(), "Blender".to_string()],
            stream_platform: StreamPlatform::Twitch,
            stream_url: "https://www.twitch.tv/some_user".to_string(),
            is_live: false,
            thumbnail: "https://picsum.photos/seed/project5/480/270".to_string(),
            viewer_count: 0,
            repo_url: "https://github.com/example/ar-history".to_string(),
            demo_url: "https://youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_projects_have_unique_ids() {
        let projects = mock_projects();
        let mut ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn test_mock_categories_are_canonical() {
        for project in mock_projects() {
            assert!(
                CATEGORIES.contains(&project.category_primary.as_str()),
                "unknown primary category: {}",
                project.category_primary
            );
        }
    }
}
