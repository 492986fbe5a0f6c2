use std::collections::HashMap;

use elastic::response::Hit;
use serde::Serialize;

use super::{fields, match_offsets, CourseSource, Document, InstitutionCourses, Matches, Page};

/// Flat search results page.
#[derive(Debug, Serialize)]
pub struct CourseResults {
    pub total_results: u64,
    pub number_of_items: usize,
    pub items: Vec<Document>,
    pub limit: usize,
    pub offset: usize,
}

/// Grouped-by-institution results page. `total_results` counts raw course
/// hits as the engine reported them; `number_of_items` counts the
/// institutions on this page.
#[derive(Debug, Serialize)]
pub struct InstitutionResults {
    pub total_results: u64,
    pub items: Vec<InstitutionCourses>,
    pub limit: usize,
    pub offset: usize,
    pub number_of_items: usize,
}

/// Turns raw hits into public documents: match offsets extracted from the
/// highlight fragments, score attached or the score and sortable name
/// stripped per the visibility flag.
pub fn shape_hits(hits: Vec<Hit<CourseSource>>, show_scores: bool) -> Vec<Document> {
    hits.into_iter()
        .map(|hit| {
            let mut document = hit.source.doc;

            let matches = extract_matches(&hit.highlight);
            document.matches = (!matches.is_empty()).then_some(matches);

            if show_scores {
                document.score = hit.score;
            } else {
                document.score = None;
                document.sort_name = None;
            }

            document
        })
        .collect()
}

/// Fragments come back keyed by the field names the query asked to
/// highlight; only the first fragment per field is scanned.
fn extract_matches(highlight: &HashMap<String, Vec<String>>) -> Matches {
    let spans = |field: &str| {
        highlight
            .get(field)
            .and_then(|fragments| fragments.first())
            .map(|fragment| match_offsets(fragment))
            .unwrap_or_default()
    };

    Matches {
        kis_course_id: spans(fields::KIS_COURSE_ID),
        english_title: spans(fields::ENGLISH_TITLE),
        welsh_title: spans(fields::WELSH_TITLE),
        institution_name: spans(fields::INSTITUTION_PUBLIC_NAME),
    }
}

/// Groups shaped documents by institution in first-seen order, which is
/// the engine's name-ascending order. Identity comes from the first course
/// seen for each institution; every course then drops its nested copy. A
/// document without institution data cannot be grouped and is skipped.
pub fn group_by_institution(documents: Vec<Document>) -> Vec<InstitutionCourses> {
    let mut groups: Vec<InstitutionCourses> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for mut document in documents {
        let Some(institution) = document.institution.take() else {
            tracing::warn!(
                course = %document.kis_course_id,
                "dropping hit without institution data"
            );
            continue;
        };

        let first_score = document.score;
        let position = *positions
            .entry(institution.ukprn.clone())
            .or_insert_with(|| {
                groups.push(InstitutionCourses {
                    score: first_score,
                    institution,
                    number_of_courses: 0,
                    courses: Vec::new(),
                });
                groups.len() - 1
            });

        groups[position].courses.push(document);
    }

    for group in &mut groups {
        group.number_of_courses = group.courses.len();
    }

    groups
}

/// Pages the grouped institution list; a window reaching past the end
/// returns everything from the offset onwards.
pub fn paginate<T>(items: Vec<T>, page: Page) -> Vec<T> {
    items
        .into_iter()
        .skip(page.offset)
        .take(page.limit)
        .collect()
}
