use serde::{Deserialize, Serialize};

/// Life stages covered by the specialist chapter writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    Childhood,
    Youth,
    MiddleAge,
    Mature,
    Elderly,
}

impl LifeStage {
    /// All stages in chronological order.
    pub const ALL: [LifeStage; 5] = [
        LifeStage::Childhood,
        LifeStage::Youth,
        LifeStage::MiddleAge,
        LifeStage::Mature,
        LifeStage::Elderly,
    ];

    /// Age range covered by this stage.
    pub fn age_range(&self) -> &'static str {
        match self {
            LifeStage::Childhood => "0-12",
            LifeStage::Youth => "13-29",
            LifeStage::MiddleAge => "30-49",
            LifeStage::Mature => "50-64",
            LifeStage::Elderly => "65+",
        }
    }
}

impl std::fmt::Display for LifeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifeStage::Childhood => write!(f, "childhood"),
            LifeStage::Youth => write!(f, "youth"),
            LifeStage::MiddleAge => write!(f, "middle_age"),
            LifeStage::Mature => write!(f, "mature"),
            LifeStage::Elderly => write!(f, "elderly"),
        }
    }
}

impl std::str::FromStr for LifeStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "childhood" => Ok(LifeStage::Childhood),
            "youth" => Ok(LifeStage::Youth),
            "middle_age" => Ok(LifeStage::MiddleAge),
            "mature" => Ok(LifeStage::Mature),
            "elderly" => Ok(LifeStage::Elderly),
            _ => Err(format!("Invalid life stage: {}", s)),
        }
    }
}

/// Output formats for archived manuscripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManuscriptFormat {
    Markdown,
    PlainText,
    Json,
}

impl ManuscriptFormat {
    /// All formats, in the order they are archived.
    pub const ALL: [ManuscriptFormat; 3] = [
        ManuscriptFormat::Markdown,
        ManuscriptFormat::PlainText,
        ManuscriptFormat::Json,
    ];

    /// File extension used when the manuscript is written to disk.
    pub fn extension(&self) -> &'static str {
        match self {
            ManuscriptFormat::Markdown => "md",
            ManuscriptFormat::PlainText => "txt",
            ManuscriptFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ManuscriptFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManuscriptFormat::Markdown => write!(f, "markdown"),
            ManuscriptFormat::PlainText => write!(f, "plain_text"),
            ManuscriptFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ManuscriptFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markdown" => Ok(ManuscriptFormat::Markdown),
            "plain_text" => Ok(ManuscriptFormat::PlainText),
            "json" => Ok(ManuscriptFormat::Json),
            _ => Err(format!("Invalid manuscript format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_stages_in_chronological_order() {
        let ranges: Vec<&str> = LifeStage::ALL.iter().map(|s| s.age_range()).collect();
        assert_eq!(ranges, vec!["0-12", "13-29", "30-49", "50-64", "65+"]);
    }

    #[test]
    fn should_reject_unknown_life_stage() {
        assert!("retirement".parse::<LifeStage>().is_err());
    }

    #[test]
    fn should_map_format_to_file_extension() {
        assert_eq!(ManuscriptFormat::Markdown.extension(), "md");
        assert_eq!(ManuscriptFormat::PlainText.extension(), "txt");
        assert_eq!(ManuscriptFormat::Json.extension(), "json");
    }
}
