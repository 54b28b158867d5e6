//! Fixed job-role profiles the scorer matches resumes against

use crate::error::{AtsError, Result};
use serde::Serialize;

/// Keyword, skill and experience-phrase template for one job category.
///
/// All terms are matched case-insensitively as plain substrings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleProfile {
    pub id: &'static str,
    pub display_name: &'static str,
    pub keywords: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub experience_phrases: &'static [&'static str],
}

static PROFILES: &[RoleProfile] = &[
    RoleProfile {
        id: "data-scientist",
        display_name: "Data Scientist",
        keywords: &[
            "python", "r", "sql", "machine learning", "statistics", "data analysis",
            "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch",
            "data visualization", "tableau", "power bi", "jupyter", "hypothesis testing",
            "a/b testing", "regression", "classification", "clustering",
            "feature engineering", "model evaluation", "cross-validation",
        ],
        skills: &[
            "Statistical Analysis", "Machine Learning", "Data Visualization",
            "Python/R Programming", "SQL", "Big Data Technologies", "Communication Skills",
        ],
        experience_phrases: &[
            "Built predictive models", "Analyzed large datasets", "Created dashboards",
            "Presented insights to stakeholders",
        ],
    },
    RoleProfile {
        id: "ml-engineer",
        display_name: "Machine Learning Engineer",
        keywords: &[
            "python", "tensorflow", "pytorch", "keras", "scikit-learn", "mlops",
            "docker", "kubernetes", "aws", "azure", "gcp", "ci/cd", "model deployment",
            "rest api", "flask", "fastapi", "spark", "airflow", "model monitoring",
            "feature store", "mlflow", "kubeflow", "model optimization",
            "hyperparameter tuning",
        ],
        skills: &[
            "ML Model Development", "MLOps", "Cloud Platforms", "Model Deployment",
            "API Development", "Distributed Computing", "Version Control",
        ],
        experience_phrases: &[
            "Deployed ML models to production", "Built scalable ML pipelines",
            "Optimized model performance", "Automated model training",
        ],
    },
    RoleProfile {
        id: "deep-learning-engineer",
        display_name: "Deep Learning Engineer",
        keywords: &[
            "deep learning", "neural networks", "cnn", "rnn", "lstm", "transformer",
            "attention mechanism", "pytorch", "tensorflow", "keras", "computer vision",
            "nlp", "gpu", "cuda", "model architecture", "backpropagation",
            "gradient descent", "batch normalization", "dropout", "transfer learning",
            "fine-tuning", "object detection", "image segmentation", "sequence modeling",
        ],
        skills: &[
            "Deep Neural Networks", "Computer Vision", "NLP", "PyTorch/TensorFlow",
            "GPU Computing", "Model Architecture Design", "Research Skills",
        ],
        experience_phrases: &[
            "Designed neural network architectures", "Trained deep learning models",
            "Implemented research papers", "Optimized model performance",
        ],
    },
    RoleProfile {
        id: "generative-ai-engineer",
        display_name: "Generative AI Engineer",
        keywords: &[
            "generative ai", "llm", "gpt", "bert", "transformer", "diffusion models",
            "gan", "vae", "stable diffusion", "openai", "anthropic", "langchain",
            "llamaindex", "prompt engineering", "fine-tuning", "rag",
            "retrieval augmented generation", "embedding", "vector database",
            "pinecone", "weaviate", "chromadb", "hugging face", "model evaluation",
        ],
        skills: &[
            "Large Language Models", "Prompt Engineering", "RAG Systems",
            "Vector Databases", "API Integration", "Fine-tuning", "Evaluation Metrics",
        ],
        experience_phrases: &[
            "Built LLM-powered applications", "Implemented RAG systems",
            "Fine-tuned language models", "Optimized prompts",
        ],
    },
    RoleProfile {
        id: "agentic-ai-engineer",
        display_name: "Agentic AI Engineer",
        keywords: &[
            "agentic ai", "autonomous agents", "multi-agent systems", "langchain",
            "autogen", "agent frameworks", "tool use", "function calling", "planning",
            "reasoning", "memory systems", "agent orchestration", "llm agents",
            "reinforcement learning", "task decomposition", "chain of thought",
            "react framework", "agent evaluation", "human in the loop", "agent safety",
        ],
        skills: &[
            "Agent Architecture", "LLM Integration", "Tool Development",
            "Planning Algorithms", "Multi-agent Coordination", "Safety & Alignment",
            "System Design",
        ],
        experience_phrases: &[
            "Developed autonomous AI agents", "Built multi-agent systems",
            "Implemented tool-use capabilities", "Designed agent architectures",
        ],
    },
    RoleProfile {
        id: "ai-researcher",
        display_name: "AI Researcher",
        keywords: &[
            "research", "publications", "arxiv", "conference", "nips", "icml", "iclr",
            "cvpr", "acl", "emnlp", "novel algorithms", "theoretical", "mathematical",
            "pytorch", "tensorflow", "experiments", "ablation studies", "benchmarking",
            "state-of-the-art", "peer review", "grants", "collaboration",
        ],
        skills: &[
            "Research Methodology", "Technical Writing", "Experimentation",
            "Mathematical Foundations", "Algorithm Development", "Publication Record",
            "Collaboration",
        ],
        experience_phrases: &[
            "Published research papers", "Conducted novel experiments",
            "Developed new algorithms", "Presented at conferences",
        ],
    },
];

/// Short identifiers accepted for backwards compatibility with older role selectors.
const ROLE_ALIASES: &[(&str, &str)] = &[
    ("deep-learning", "deep-learning-engineer"),
    ("generative-ai", "generative-ai-engineer"),
    ("agentic-ai", "agentic-ai-engineer"),
];

/// All supported profiles, in display order.
pub fn all_profiles() -> &'static [RoleProfile] {
    PROFILES
}

/// Look up a profile by its identifier (or a legacy alias).
pub fn get_profile(role_id: &str) -> Result<&'static RoleProfile> {
    let canonical = ROLE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == role_id)
        .map(|(_, id)| *id)
        .unwrap_or(role_id);

    PROFILES
        .iter()
        .find(|p| p.id == canonical)
        .ok_or_else(|| AtsError::UnknownRole(role_id.to_string()))
}
