use serde::{Deserialize, Serialize};

/// Index field names for the searchable and filterable document members.
pub mod fields {
    pub const KIS_COURSE_ID: &str = "doc.kis_course_id";
    pub const ENGLISH_TITLE: &str = "doc.english_title";
    pub const WELSH_TITLE: &str = "doc.welsh_title";
    pub const INSTITUTION_PUBLIC_NAME: &str = "doc.institution.public_ukprn_name";
    pub const INSTITUTION_UKPRN_NAME: &str = "doc.institution.ukprn_name";
    pub const SORT_NAME: &str = "doc.institution_name";
    pub const COUNTRY_CODE: &str = "doc.country_code";
    pub const DISTANCE_LEARNING: &str = "doc.distance_learning";
    pub const FOUNDATION_YEAR: &str = "doc.foundation_year";
    pub const HONOURS_AWARD: &str = "doc.honours_award";
    pub const LENGTH_OF_COURSE: &str = "doc.length_of_course";
    pub const MODE: &str = "doc.mode";
    pub const SANDWICH_YEAR: &str = "doc.sandwich_year";
    pub const YEAR_ABROAD: &str = "doc.year_abroad";
    pub const SCORE: &str = "_score";
}

/// The `_source` of an indexed hit; the course document sits under a `doc`
/// key.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseSource {
    pub doc: Document,
}

/// A course document as indexed and as re-emitted publicly. `score` and
/// `matches` are attached by the shaper, never present in the index;
/// `sort_name` is the lower-cased institution name the index sorts on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(rename = "institution_name", skip_serializing_if = "Option::is_none")]
    pub sort_name: Option<String>,
    pub kis_course_id: String,
    pub english_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welsh_title: Option<String>,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_learning: Option<String>,
    pub foundation_year: String,
    pub honours_award: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<Institution>,
    pub length_of_course: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Matches>,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nhs_funded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<Qualification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandwich_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_abroad: Option<String>,
}

/// Institution identity carried inside a course document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub public_ukprn: String,
    pub public_ukprn_name: String,
    pub ukprn: String,
    pub ukprn_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lc_ukprn_name: Option<String>,
}

/// One entry in the grouped institution-courses result: the institution's
/// identity plus every matching course in engine order. `score` is the
/// first (highest-ranked) course's score when score visibility is on.
#[derive(Debug, Clone, Serialize)]
pub struct InstitutionCourses {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(flatten)]
    pub institution: Institution,
    pub number_of_courses: usize,
    pub courses: Vec<Document>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Qualification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Character offset spans per highlighted field, keyed in the output the
/// way the public document names those members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matches {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub kis_course_id: Vec<Snippet>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub english_title: Vec<Snippet>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub welsh_title: Vec<Snippet>,
    #[serde(
        rename = "institution.public_ukprn_name",
        skip_serializing_if = "Vec::is_empty",
        default
    )]
    pub institution_name: Vec<Snippet>,
}

impl Matches {
    pub fn is_empty(&self) -> bool {
        self.kis_course_id.is_empty()
            && self.english_title.is_empty()
            && self.welsh_title.is_empty()
            && self.institution_name.is_empty()
    }
}

/// Half-open `[start, end)` character offsets into a field's
/// delimiter-free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub start: usize,
    pub end: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_members_disappear_from_output() {
        let document: Document = serde_json::from_value(json!({
            "kis_course_id": "AB123",
            "english_title": "Economics",
            "country": "England",
            "foundation_year": "0",
            "honours_award": "1",
            "length_of_course": "3",
            "link": "/course/AB123",
            "mode": "1",
        }))
        .unwrap();

        let value = serde_json::to_value(&document).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 8);
        for absent in [
            "score",
            "institution_name",
            "welsh_title",
            "institution",
            "location",
            "matches",
            "nhs_funded",
            "qualification",
        ] {
            assert!(object.get(absent).is_none(), "{absent} should be omitted");
        }
    }

    #[test]
    fn grouped_entry_flattens_institution_identity() {
        let entry = InstitutionCourses {
            score: None,
            institution: Institution {
                public_ukprn: "10000001".to_string(),
                public_ukprn_name: "University of Placeholder".to_string(),
                ukprn: "10000002".to_string(),
                ukprn_name: "The University of Placeholder".to_string(),
                lc_ukprn_name: None,
            },
            number_of_courses: 0,
            courses: Vec::new(),
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["ukprn"], "10000002");
        assert_eq!(value["number_of_courses"], 0);
        assert!(value.get("score").is_none());
    }
}
