use maud::{html, Markup};
use shared::domain::Professional;

use crate::format::{item_key, present};

pub const EMPTY_PROFESSIONALS: &str = "No professionals found yet.";

const MAX_SKILLS: usize = 6;

pub fn professionals_grid(items: &[Professional]) -> Markup {
    if items.is_empty() {
        return html! { div class="empty-state" { (EMPTY_PROFESSIONALS) } };
    }
    html! {
        div class="grid professionals" {
            @for (index, professional) in items.iter().enumerate() {
                (professional_card(professional, index))
            }
        }
    }
}

fn professional_card(p: &Professional, index: usize) -> Markup {
    let key = item_key(p.key(), index);
    let name = present(&p.name);
    let skills = p.skills.as_deref().unwrap_or_default();
    html! {
        div class="card professional-card" data-key=(key) {
            div class="card-header" {
                div class="avatar" { (initial(name)) }
                div {
                    div class="name" { (name.unwrap_or("Unnamed")) }
                    div class="title" { (present(&p.title).unwrap_or("Professional")) }
                }
            }
            @if !skills.is_empty() {
                div class="skills" {
                    @for skill in skills.iter().take(MAX_SKILLS) {
                        span class="skill" { (skill) }
                    }
                }
            }
            div class="location" { (location_line(p)) }
        }
    }
}

fn initial(name: Option<&str>) -> String {
    name.and_then(|name| name.chars().next())
        .unwrap_or('H')
        .to_string()
}

fn location_line(p: &Professional) -> String {
    let mut line = String::new();
    if let Some(city) = present(&p.city) {
        line.push_str(city);
        line.push_str(", ");
    }
    line.push_str(present(&p.state).unwrap_or_default());
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::ProfessionalId;

    fn professional(id: Option<&str>, name: Option<&str>) -> Professional {
        Professional {
            id: id.map(|id| ProfessionalId(id.to_string())),
            name: name.map(str::to_string),
            ..Professional::default()
        }
    }

    #[test]
    fn empty_grid_renders_only_the_message() {
        let html = professionals_grid(&[]).into_string();
        assert_eq!(
            html,
            r#"<div class="empty-state">No professionals found yet.</div>"#
        );
        assert!(!html.contains("card"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let html = professionals_grid(&[professional(None, None)]).into_string();
        assert!(html.contains(r#"<div class="avatar">H</div>"#));
        assert!(html.contains(r#"<div class="name">Unnamed</div>"#));
        assert!(html.contains(r#"<div class="title">Professional</div>"#));
        assert!(html.contains(r#"data-key="idx-0""#));
        assert!(!html.contains("skills"));
    }

    #[test]
    fn card_shows_initial_skills_and_location() {
        let p = Professional {
            id: Some(ProfessionalId("p1".into())),
            fallback_id: None,
            name: Some("Ayo Balogun".into()),
            title: Some("Cloud Architect".into()),
            skills: Some(
                ["AWS", "GCP", "Azure", "Terraform", "K8s", "Go", "Rust"]
                    .map(String::from)
                    .to_vec(),
            ),
            city: Some("Lagos".into()),
            state: Some("Nigeria".into()),
        };
        let html = professionals_grid(&[p]).into_string();
        assert!(html.contains(r#"data-key="p1""#));
        assert!(html.contains(r#"<div class="avatar">A</div>"#));
        assert!(html.contains("Cloud Architect"));
        assert_eq!(html.matches(r#"class="skill""#).count(), 6);
        assert!(!html.contains("Rust"));
        assert!(html.contains(r#"<div class="location">Lagos, Nigeria</div>"#));
    }

    #[test]
    fn location_without_city_shows_region_only() {
        let p = Professional {
            state: Some("Kenya".into()),
            ..Professional::default()
        };
        assert_eq!(location_line(&p), "Kenya");
        assert_eq!(location_line(&Professional::default()), "");
    }

    #[test]
    fn cards_keep_input_order() {
        let items = [
            professional(Some("z"), Some("Zola")),
            professional(Some("a"), Some("Amara")),
        ];
        let html = professionals_grid(&items).into_string();
        let zola = html.find("Zola").expect("zola");
        let amara = html.find("Amara").expect("amara");
        assert!(zola < amara);
    }

    #[test]
    fn text_is_escaped() {
        let html = professionals_grid(&[professional(None, Some("<script>"))]).into_string();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
