//! Default content served when the document store is absent, empty, or
//! failing.

use crate::models::resource::{Resource, ResourceCategory};
use crate::models::team::TeamMember;

pub fn default_resources() -> Vec<Resource> {
    vec![
        resource(
            "Coping with Exam Stress (IT)",
            "Practical steps for managing deadlines and exams.",
            "https://www.mind.org.uk/",
            ResourceCategory::Guide,
        ),
        resource(
            "Understanding Burnout",
            "Signs and strategies for students in tech.",
            "https://www.helpguide.org/",
            ResourceCategory::Article,
        ),
        resource(
            "Breathing Exercise",
            "4-7-8 guided breathing timer.",
            "https://www.boxbreathingapp.com/",
            ResourceCategory::Tool,
        ),
        resource(
            "24/7 Helpline",
            "Immediate assistance if you’re in crisis.",
            "https://988lifeline.org/",
            ResourceCategory::Helpline,
        ),
    ]
}

pub fn default_team() -> Vec<TeamMember> {
    vec![
        member("Ava Patel", "Clinical Advisor", "Guides assessment criteria"),
        member("Liam Chen", "Data Analyst", "Turns mood logs into insight"),
        member("Sara Gomez", "Frontend", "Designs interactive tools"),
        member("Noah Singh", "Backend", "APIs and data layer"),
    ]
}

fn resource(title: &str, description: &str, url: &str, category: ResourceCategory) -> Resource {
    Resource {
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        category,
    }
}

fn member(name: &str, role: &str, bio: &str) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        bio: Some(bio.to_string()),
        avatar: None,
    }
}
