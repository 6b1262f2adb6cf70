use crate::core::directory::DirectorySession;
use crate::core::StudentRecord;
use crate::view::Element;

pub const CARD_CLASS: &str = "col-12 col-sm-12 col-md-6 col-lg-4 col-xl-3 mb-4";

pub fn render_student_card(student: &StudentRecord) -> Element {
    Element::new("div")
        .class(CARD_CLASS)
        .child(Element::new("h3").text(student.full_name()))
        .child(Element::new("b").text(format!("Major: {}", student.major)))
        .child(Element::new("p").text(format!("Credits: {}", student.num_credits)))
        .child(Element::new("p").text(format!(
            "From Wisconsin: {}",
            if student.from_wisconsin { "Yes" } else { "No" }
        )))
        .child(
            Element::new("ul").children(
                student
                    .interests
                    .iter()
                    .map(|interest| Element::new("li").text(interest.clone())),
            ),
        )
}

/// 每次都產生全新的容器，不保留先前的卡片
pub fn render_students(students: &[StudentRecord]) -> Element {
    Element::new("div")
        .id("students")
        .class("row")
        .children(students.iter().map(render_student_card))
}

pub fn render_directory_page(session: &DirectorySession) -> Element {
    Element::new("div")
        .class("container")
        .child(Element::new("h1").text("Badger Book"))
        .child(Element::new("p").id("num-results").text(session.count_label()))
        .child(render_students(session.visible()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::directory::SearchQuery;
    use crate::core::StudentName;

    fn student(first: &str, last: &str, major: &str, credits: i64, wi: bool) -> StudentRecord {
        StudentRecord {
            name: StudentName {
                first: first.to_string(),
                last: last.to_string(),
            },
            major: major.to_string(),
            num_credits: credits,
            from_wisconsin: wi,
            interests: vec!["hiking".to_string(), "jazz".to_string()],
        }
    }

    #[test]
    fn test_renders_one_card_per_student_in_order() {
        let students = vec![
            student("A", "B", "CS", 12, true),
            student("C", "D", "Math", 9, false),
            student("E", "F", "Art", 15, true),
        ];

        let container = render_students(&students);
        let cards: Vec<_> = container.element_children().collect();

        assert_eq!(cards.len(), 3);
        let headers: Vec<String> = cards
            .iter()
            .map(|card| card.find_all("h3")[0].text_content())
            .collect();
        assert_eq!(headers, vec!["A B", "C D", "E F"]);
    }

    #[test]
    fn test_card_lines() {
        let card = render_student_card(&student("C", "D", "Math", 9, false));
        let lines: Vec<String> = card
            .element_children()
            .filter(|el| el.is_text_only())
            .map(|el| el.text_content())
            .collect();

        assert_eq!(
            lines,
            vec!["C D", "Major: Math", "Credits: 9", "From Wisconsin: No"]
        );
        assert_eq!(card.get_attr("class"), Some(CARD_CLASS));

        let interests: Vec<String> = card
            .find_all("li")
            .iter()
            .map(|li| li.text_content())
            .collect();
        assert_eq!(interests, vec!["hiking", "jazz"]);

        let wi = render_student_card(&student("A", "B", "CS", 12, true));
        assert!(wi.text_content().contains("From Wisconsin: Yes"));
    }

    #[test]
    fn test_empty_list_renders_empty_container() {
        let container = render_students(&[]);
        assert_eq!(container.element_children().count(), 0);
        assert_eq!(container.get_attr("id"), Some("students"));
    }

    #[test]
    fn test_page_shows_count_for_visible_subset() {
        let mut session = DirectorySession::new(vec![
            student("A", "B", "CS", 12, true),
            student("C", "D", "Math", 9, false),
        ]);
        session.search(&SearchQuery::new("", "math", ""));

        let page = render_directory_page(&session);
        assert_eq!(
            page.find_by_id("num-results").unwrap().text_content(),
            "1 student(s)"
        );
        assert_eq!(
            page.find_by_id("students").unwrap().element_children().count(),
            1
        );
    }
}
