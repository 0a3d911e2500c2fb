//! Canonical text rendering for embedding.
//!
//! The blob built here is the sole input handed to the embedding model, so it
//! must be byte-deterministic: fixed field order, fixed labels, fixed
//! separator, absent/empty fields omitted entirely.

use crate::model::{CandidateProfile, JobRequisition};

const SEPARATOR: &str = " | ";

/// Renders a candidate profile into its canonical embedding text.
pub fn profile_text(profile: &CandidateProfile) -> String {
    let mut parts: Vec<String> = Vec::new();

    push_opt(&mut parts, "Name", profile.name.as_deref());
    push_opt(&mut parts, "Role", profile.role.as_deref());
    push_opt(&mut parts, "Location", profile.location.as_deref());
    if profile.experience_years > 0 {
        parts.push(format!("Experience: {} years", profile.experience_years));
    }
    push_list(&mut parts, "Languages", &profile.languages);
    push_list(&mut parts, "Project Types", &profile.project_scope);
    push_list(&mut parts, "Customer Markets", &profile.customer);
    push_list(&mut parts, "Skills", &profile.skills);
    push_list(&mut parts, "Education", &profile.education);
    push_list(&mut parts, "Certifications", &profile.certifications);
    if !profile.work_experience.is_empty() {
        parts.push(format!(
            "Work Experience: {}",
            profile.work_experience.join(" | ")
        ));
    }

    parts.join(SEPARATOR)
}

/// Renders a job requisition into its canonical embedding text.
pub fn requisition_text(requisition: &JobRequisition) -> String {
    let mut parts: Vec<String> = Vec::new();

    push_opt(&mut parts, "Job Title", requisition.job_title.as_deref());
    push_opt(&mut parts, "Company", requisition.company.as_deref());
    if requisition.experience_required > 0 {
        parts.push(format!(
            "Experience Required: {} years",
            requisition.experience_required
        ));
    }
    push_list(&mut parts, "Required Skills", &requisition.required_skills);
    push_list(&mut parts, "Preferred Skills", &requisition.preferred_skills);
    push_list(
        &mut parts,
        "Education Required",
        &requisition.education_required,
    );
    push_list(&mut parts, "Responsibilities", &requisition.responsibilities);

    parts.join(SEPARATOR)
}

fn push_opt(parts: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            parts.push(format!("{label}: {value}"));
        }
    }
}

fn push_list(parts: &mut Vec<String>, label: &str, values: &[String]) {
    if !values.is_empty() {
        parts.push(format!("{label}: {}", values.join(", ")));
    }
}
