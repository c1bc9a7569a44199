//! What the page shows. Loaded from an HJSON file, or the built-in portfolio when none is
//! given. Anything left out of the file disables only the part of the page that uses it.

use std::{
    fs,
    path::Path,
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    info,
    warn,
};

use crate::core::{
    FilterButton,
    FolioError,
    ProjectCard,
    SectionInfo,
    SkillInfo,
    StatInfo,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactContent {
    pub recipient: String,
    #[serde(default)]
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
    pub owner: String,
    pub tagline: String,
    pub phrases: Vec<String>,
    pub sections: Vec<SectionInfo>,
    pub stats: Vec<StatInfo>,
    pub skills: Vec<SkillInfo>,
    pub skill_tags: Vec<String>,
    pub filters: Vec<FilterButton>,
    pub projects: Vec<ProjectCard>,
    pub doodles: usize,
    pub orbs: usize,
    pub contact: Option<ContactContent>,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            owner: "Pratek".to_string(),
            tagline: "Building things that learn from data.".to_string(),
            phrases: strings(&[
                "AI/ML Researcher",
                "Data Scientist",
                "Computer Vision Specialist",
                "LLM Enthusiast",
                "Student Tutor",
            ]),
            sections: vec![
                SectionInfo {
                    id: "about".to_string(),
                    title: "About Me".to_string(),
                    body: strings(&[
                        "I work on machine learning systems end to end, from data collection to deployment.",
                        "Most of my recent work is in computer vision and large language models.",
                    ]),
                    timeline: Vec::new(),
                },
                SectionInfo {
                    id: "experience".to_string(),
                    title: "Experience".to_string(),
                    body: Vec::new(),
                    timeline: strings(&[
                        "Research Assistant, Vision Lab",
                        "Data Science Intern, Retail Analytics",
                        "Peer Tutor, Mathematics and Programming",
                    ]),
                },
                SectionInfo {
                    id: "skills".to_string(),
                    title: "Skills".to_string(),
                    body: Vec::new(),
                    timeline: Vec::new(),
                },
                SectionInfo {
                    id: "projects".to_string(),
                    title: "Projects".to_string(),
                    body: Vec::new(),
                    timeline: Vec::new(),
                },
                SectionInfo {
                    id: "contact".to_string(),
                    title: "Get In Touch".to_string(),
                    body: Vec::new(),
                    timeline: Vec::new(),
                },
            ],
            stats: vec![
                StatInfo { label: "Projects".to_string(), display: "15+".to_string() },
                StatInfo { label: "Publications".to_string(), display: "3+".to_string() },
                StatInfo { label: "Students Tutored".to_string(), display: "50+".to_string() },
            ],
            skills: vec![
                SkillInfo { name: "Python".to_string(), percent: 95 },
                SkillInfo { name: "PyTorch".to_string(), percent: 85 },
                SkillInfo { name: "SQL".to_string(), percent: 80 },
                SkillInfo { name: "Rust".to_string(), percent: 60 },
            ],
            skill_tags: strings(&["OpenCV", "Transformers", "Pandas", "Docker", "Git", "LangChain"]),
            filters: vec![
                FilterButton::new("All", "all"),
                FilterButton::new("Computer Vision", "cv"),
                FilterButton::new("NLP / LLM", "nlp"),
                FilterButton::new("Machine Learning", "ml"),
            ],
            projects: vec![
                ProjectCard {
                    title: "Real-time Pose Estimation".to_string(),
                    description: "Keypoint detection running on a webcam feed.".to_string(),
                    tags: ["cv", "pytorch"].iter().map(|t| t.to_string()).collect(),
                },
                ProjectCard {
                    title: "Course Assistant Chatbot".to_string(),
                    description: "Retrieval-augmented answers over lecture notes.".to_string(),
                    tags: ["nlp", "llm"].iter().map(|t| t.to_string()).collect(),
                },
                ProjectCard {
                    title: "Demand Forecasting".to_string(),
                    description: "Gradient-boosted forecasts for store inventory.".to_string(),
                    tags: ["ml", "tabular"].iter().map(|t| t.to_string()).collect(),
                },
                ProjectCard {
                    title: "Document Layout Parser".to_string(),
                    description: "Detects tables and figures in scanned papers.".to_string(),
                    tags: ["cv", "nlp"].iter().map(|t| t.to_string()).collect(),
                },
            ],
            doodles: 3,
            orbs: 3,
            contact: Some(ContactContent {
                recipient: "hello@example.com".to_string(),
                blurb: "Have a project in mind or just want to say hi? Send a message.".to_string(),
            }),
        }
    }
}

impl PortfolioContent {
    pub fn from_hjson(text: &str) -> Result<Self, FolioError> {
        Ok(serde_hjson::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let text = fs::read_to_string(path)
            .map_err(|e| FolioError::FailedToLoadFile(format!("{}: {}", path.display(), e)))?;
        let content = Self::from_hjson(&text)?;
        info!("Loaded page content from {}", path.display());
        Ok(content)
    }

    /// Loads `path` if given, falling back to the built-in content on any error.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            None => Self::default(),
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                warn!("Failed to load page content: {}. Using built-in content.", e);
                Self::default()
            }),
        }
    }
}
