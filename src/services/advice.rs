use serde::{Deserialize, Serialize};

const BUILTIN_TIPS: &str = include_str!("../../static/tips.json");
const MAX_TIPS: usize = 3;
const GENERAL_TAG: &str = "general";

/// A care or sustainability tip tagged with the categories and materials it applies to
#[derive(Debug, Clone, Deserialize)]
pub struct Tip {
    pub text: String,
    pub tags: Vec<String>,
}

/// Keyword-matched collection of sustainability tips
#[derive(Debug, Clone)]
pub struct TipBook {
    tips: Vec<Tip>,
}

impl TipBook {
    /// Tips shipped with the service
    pub fn builtin() -> serde_json::Result<Self> {
        Self::from_json(BUILTIN_TIPS)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut tips: Vec<Tip> = serde_json::from_str(json)?;
        for tip in &mut tips {
            for tag in &mut tip.tags {
                *tag = tag.to_lowercase();
            }
        }
        Ok(Self { tips })
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    /// Up to three tips tagged with the category or material, else general tips
    pub fn lookup(&self, category: &str, material: &str) -> Vec<String> {
        let category = category.trim().to_lowercase();
        let material = material.trim().to_lowercase();
        let tagged = |key: &str, tip: &Tip| !key.is_empty() && tip.tags.iter().any(|t| t == key);

        let mut matched: Vec<&Tip> = self
            .tips
            .iter()
            .filter(|tip| tagged(category.as_str(), *tip) || tagged(material.as_str(), *tip))
            .collect();

        if matched.is_empty() {
            matched = self
                .tips
                .iter()
                .filter(|tip| tagged(GENERAL_TAG, *tip))
                .collect();
        }

        matched
            .into_iter()
            .take(MAX_TIPS)
            .map(|tip| tip.text.clone())
            .collect()
    }
}

/// Canned answer from the wardrobe advisor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisorAnswer {
    pub tip: String,
}

/// Answers garment-care questions by keyword
pub fn answer_question(question: &str) -> AdvisorAnswer {
    let question = question.to_lowercase();

    let tip = if mentions(&question, &["jean", "wash"]) {
        "Wash jeans in cold water and air dry for longevity."
    } else if mentions(&question, &["hole", "repair"]) {
        "Use an iron-on patch or hand-stitch small holes to extend garment life."
    } else {
        "Try to repair, upcycle or donate clothing for sustainable fashion!"
    };

    AdvisorAnswer {
        tip: tip.to_string(),
    }
}

fn mentions(question: &str, words: &[&str]) -> bool {
    words.iter().all(|word| question.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"text": "denim 1", "tags": ["Denim"]},
        {"text": "denim 2", "tags": ["denim", "bottoms"]},
        {"text": "bottoms", "tags": ["bottoms"]},
        {"text": "denim 3", "tags": ["denim"]},
        {"text": "general", "tags": ["general"]}
    ]"#;

    #[test]
    fn test_builtin_tips_parse() {
        let book = TipBook::builtin().unwrap();
        assert!(!book.is_empty());
        assert!(!book.lookup("", "").is_empty());
    }

    #[test]
    fn test_lookup_matches_category_or_material() {
        let book = TipBook::from_json(SAMPLE).unwrap();
        assert_eq!(book.lookup("Bottoms", ""), vec!["denim 2", "bottoms"]);
        assert_eq!(book.lookup("", "DENIM"), vec!["denim 1", "denim 2", "denim 3"]);
    }

    #[test]
    fn test_lookup_caps_at_three() {
        let book = TipBook::from_json(SAMPLE).unwrap();
        assert_eq!(book.lookup("bottoms", "denim").len(), 3);
    }

    #[test]
    fn test_lookup_falls_back_to_general() {
        let book = TipBook::from_json(SAMPLE).unwrap();
        assert_eq!(book.lookup("hats", ""), vec!["general"]);
        assert_eq!(book.lookup("", ""), vec!["general"]);
    }

    #[test]
    fn test_advisor_keywords() {
        assert!(answer_question("How should I WASH my jeans?")
            .tip
            .contains("cold water"));
        assert!(answer_question("Can I repair a hole in my sweater?")
            .tip
            .contains("iron-on patch"));
        assert!(answer_question("What should I wear?").tip.contains("upcycle"));
    }
}
