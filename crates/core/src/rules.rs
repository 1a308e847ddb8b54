//! Keyword rule engine.
//!
//! The engine is an ordered table of independent rules. Each rule is a predicate over the
//! lower-cased symptom text paired with an outcome. Every matching rule overwrites the working
//! prescription in table order, so a later match replaces the guidance of an earlier one. Two
//! adjustments based on BMI and age are applied after the table has run.

use crate::assessment::SymptomAssessmentInput;
use crate::constants::{BMI_OBESITY_THRESHOLD, OLDER_ADULT_AGE, YOUNG_CHILD_AGE};
use crate::prescription::{owned, Prescription, Severity};

/// Lower-cased symptom text with keyword helpers.
pub struct Symptoms(String);

impl Symptoms {
    pub fn new(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    pub fn has(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn has_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.has(k))
    }
}

/// What a matching rule does to the urgency flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Leave whatever an earlier rule (or the default) decided.
    Unchanged,
    Set(bool),
}

/// The fields a matching rule writes.
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    pub severity: Severity,
    pub condition: &'static str,
    pub advice: &'static [&'static str],
    pub medications: &'static [&'static str],
    pub urgency: Urgency,
    pub lifestyle: &'static [&'static str],
}

impl RuleOutcome {
    fn apply(&self, prescription: &mut Prescription) {
        prescription.severity = self.severity;
        prescription.condition = self.condition.to_owned();
        prescription.advice = owned(self.advice);
        prescription.medications = owned(self.medications);
        if let Urgency::Set(urgent) = self.urgency {
            prescription.urgency = urgent;
        }
        prescription.lifestyle = owned(self.lifestyle);
    }
}

/// One (predicate, effect) pair of the rule table.
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&Symptoms) -> bool,
    pub outcome: fn(&Symptoms, &SymptomAssessmentInput) -> RuleOutcome,
}

/// The rule table, in evaluation order.
pub static RULES: &[Rule] = &[
    Rule {
        name: "fever",
        matches: |s| s.has_any(&["fever", "temperature"]),
        outcome: fever,
    },
    Rule {
        name: "cold",
        matches: |s| s.has_any(&["cold", "cough", "runny nose", "congestion"]),
        outcome: cold,
    },
    Rule {
        name: "headache",
        matches: |s| s.has_any(&["headache", "migraine"]),
        outcome: headache,
    },
    Rule {
        name: "gastrointestinal",
        matches: |s| s.has_any(&["stomach", "nausea", "vomit", "diarrhea", "abdominal"]),
        outcome: gastrointestinal,
    },
    Rule {
        name: "acute_pain",
        matches: |s| s.has("pain") && s.has_any(&["chest", "severe", "sharp"]),
        outcome: acute_pain,
    },
    Rule {
        name: "allergy",
        matches: |s| s.has_any(&["allergy", "itching", "rash"]),
        outcome: allergy,
    },
    Rule {
        name: "back_pain",
        matches: |s| s.has("back") && s.has("pain"),
        outcome: back_pain,
    },
];

const WEIGHT_MANAGEMENT: &[&str] = &[
    "Consider weight management program",
    "Increase physical activity gradually",
    "Consult a nutritionist for dietary guidance",
];

const OLDER_ADULT_ADVICE: &str = "Consider consulting with your primary care physician";
const OLDER_ADULT_LIFESTYLE: &str = "Regular health checkups are important at your age";

/// Derive a prescription from one assessment input.
///
/// Deterministic and infallible: identical input always yields an identical prescription.
pub fn generate_prescription(input: &SymptomAssessmentInput) -> Prescription {
    let symptoms = Symptoms::new(input.symptoms.as_str());
    let mut prescription = Prescription::default();

    for rule in RULES {
        if (rule.matches)(&symptoms) {
            tracing::debug!(rule = rule.name, "symptom rule matched");
            (rule.outcome)(&symptoms, input).apply(&mut prescription);
        }
    }

    if input.bmi() > BMI_OBESITY_THRESHOLD {
        prescription.lifestyle.extend(owned(WEIGHT_MANAGEMENT));
    }

    if input.age > OLDER_ADULT_AGE {
        prescription.advice.push(OLDER_ADULT_ADVICE.to_owned());
        prescription.lifestyle.push(OLDER_ADULT_LIFESTYLE.to_owned());
    }

    prescription
}

/// Names of the rules whose predicate matches `text`, in table order.
pub fn matching_rules(text: &str) -> Vec<&'static str> {
    let symptoms = Symptoms::new(text);
    RULES
        .iter()
        .filter(|rule| (rule.matches)(&symptoms))
        .map(|rule| rule.name)
        .collect()
}

fn fever(_: &Symptoms, input: &SymptomAssessmentInput) -> RuleOutcome {
    RuleOutcome {
        severity: Severity::Moderate,
        condition: "Fever / Viral Infection",
        advice: &[
            "Monitor temperature regularly",
            "Rest in a cool, comfortable environment",
            "Drink plenty of fluids to prevent dehydration",
            "Seek medical attention if fever persists beyond 3 days or exceeds 103°F (39.4°C)",
        ],
        medications: &[
            "Paracetamol (Acetaminophen) 500mg every 6 hours",
            "Ibuprofen 400mg every 8 hours",
        ],
        urgency: Urgency::Set(input.age > OLDER_ADULT_AGE || input.age < YOUNG_CHILD_AGE),
        lifestyle: &[
            "Take lukewarm baths to help reduce fever",
            "Avoid heavy physical activity",
            "Eat light, easily digestible foods",
        ],
    }
}

fn cold(_: &Symptoms, _: &SymptomAssessmentInput) -> RuleOutcome {
    RuleOutcome {
        severity: Severity::Low,
        condition: "Common Cold / Upper Respiratory Infection",
        advice: &[
            "Get plenty of rest to help your body fight the infection",
            "Stay hydrated with water, warm liquids, and herbal teas",
            "Use a humidifier to ease congestion",
            "Gargle with warm salt water for sore throat",
        ],
        medications: &[
            "Antihistamines (e.g., Cetirizine 10mg once daily)",
            "Cough suppressants (e.g., Dextromethorphan)",
            "Decongestants (e.g., Pseudoephedrine)",
        ],
        urgency: Urgency::Unchanged,
        lifestyle: &[
            "Avoid smoking and secondhand smoke",
            "Wash hands frequently",
            "Use tissues when sneezing or coughing",
            "Consider taking Vitamin C supplements",
        ],
    }
}

fn headache(s: &Symptoms, _: &SymptomAssessmentInput) -> RuleOutcome {
    let migraine = s.has("migraine");
    RuleOutcome {
        severity: if s.has("severe") || migraine {
            Severity::Moderate
        } else {
            Severity::Low
        },
        condition: if migraine {
            "Migraine"
        } else {
            "Tension Headache"
        },
        advice: &[
            "Rest in a quiet, dark room",
            "Apply a cold or warm compress to your head or neck",
            "Stay hydrated throughout the day",
            "Avoid bright lights and loud noises",
        ],
        medications: &[
            "Paracetamol 500-1000mg every 6 hours",
            "Ibuprofen 400mg every 8 hours",
            "Aspirin 325-650mg every 4 hours",
        ],
        urgency: Urgency::Set(s.has_any(&["severe", "sudden", "worst"])),
        lifestyle: &[
            "Maintain regular sleep schedule",
            "Reduce screen time",
            "Practice relaxation techniques",
            "Stay hydrated",
            "Avoid caffeine and alcohol",
        ],
    }
}

fn gastrointestinal(s: &Symptoms, _: &SymptomAssessmentInput) -> RuleOutcome {
    RuleOutcome {
        severity: if s.has_any(&["severe", "blood"]) {
            Severity::High
        } else {
            Severity::Moderate
        },
        condition: "Gastrointestinal Distress",
        advice: &[
            "Follow the BRAT diet (Bananas, Rice, Applesauce, Toast)",
            "Avoid dairy, fatty, and spicy foods",
            "Stay hydrated with oral rehydration solutions",
            "Eat small, frequent meals instead of large ones",
        ],
        medications: &[
            "Antacids (e.g., Omeprazole 20mg once daily)",
            "Anti-nausea medication (e.g., Domperidone)",
            "Oral rehydration salts",
            "Loperamide for diarrhea (if needed)",
        ],
        urgency: Urgency::Set(s.has_any(&["blood", "severe pain"])),
        lifestyle: &[
            "Avoid alcohol and caffeine",
            "Eat slowly and chew thoroughly",
            "Avoid lying down immediately after eating",
            "Manage stress levels",
        ],
    }
}

fn acute_pain(_: &Symptoms, _: &SymptomAssessmentInput) -> RuleOutcome {
    RuleOutcome {
        severity: Severity::High,
        condition: "Acute Pain - Requires Medical Evaluation",
        advice: &[
            "Seek immediate medical attention",
            "Do not ignore persistent or severe pain",
            "Note the location, intensity, and duration of pain",
            "Avoid self-medicating with strong painkillers",
        ],
        medications: &["Consult a doctor before taking any medication"],
        urgency: Urgency::Set(true),
        lifestyle: &["Avoid strenuous activities", "Rest until medical evaluation"],
    }
}

fn allergy(s: &Symptoms, _: &SymptomAssessmentInput) -> RuleOutcome {
    let serious = s.has_any(&["breathing", "swelling"]);
    RuleOutcome {
        severity: if serious { Severity::High } else { Severity::Low },
        condition: "Allergic Reaction",
        advice: &[
            "Identify and avoid the allergen if possible",
            "Take antihistamines as needed",
            "Apply cold compress to affected areas",
            "Monitor for signs of severe allergic reaction (anaphylaxis)",
        ],
        medications: &[
            "Antihistamines (e.g., Cetirizine 10mg, Loratadine 10mg)",
            "Hydrocortisone cream 1% for skin irritation",
            "Calamine lotion for itching",
        ],
        urgency: Urgency::Set(serious),
        lifestyle: &[
            "Keep antihistamines on hand",
            "Wear a medical alert bracelet if severe allergies",
            "Avoid known allergens",
            "Consider allergy testing",
        ],
    }
}

fn back_pain(_: &Symptoms, _: &SymptomAssessmentInput) -> RuleOutcome {
    RuleOutcome {
        severity: Severity::Moderate,
        condition: "Back Pain / Muscle Strain",
        advice: &[
            "Apply ice for first 48 hours, then heat",
            "Gentle stretching exercises",
            "Maintain proper posture",
            "Avoid heavy lifting",
        ],
        medications: &[
            "Ibuprofen 400mg three times daily",
            "Paracetamol 500-1000mg every 6 hours",
            "Topical pain relief creams",
        ],
        urgency: Urgency::Unchanged,
        lifestyle: &[
            "Exercise regularly to strengthen back muscles",
            "Use ergonomic furniture",
            "Practice good posture",
            "Maintain healthy weight",
        ],
    }
}
