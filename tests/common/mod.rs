//! Shared fixtures for integration tests.

use talentmatch::{CandidateProfile, JobRequisition, RoleCategory};

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A mid-level backend candidate with a realistic amount of detail.
pub fn backend_profile() -> CandidateProfile {
    CandidateProfile {
        name: Some("Linh Tran".to_string()),
        email: Some("linh.tran@example.com".to_string()),
        role: Some("Backend Developer".to_string()),
        role_category: Some(RoleCategory::Backend),
        location: Some("Da Nang".to_string()),
        experience_years: 4,
        languages: strings(&["English", "Japanese"]),
        skills: strings(&["Python", "FastAPI", "PostgreSQL", "Docker"]),
        education: strings(&["Bachelor of Computer Science"]),
        work_experience: strings(&["API development at a fintech startup"]),
        ..Default::default()
    }
}

/// A requisition the backend profile should score well against.
pub fn backend_requisition() -> JobRequisition {
    JobRequisition {
        job_title: Some("Backend Engineer".to_string()),
        job_category: Some(RoleCategory::Backend),
        company: Some("Acme Corp".to_string()),
        required_skills: strings(&["python", "postgresql"]),
        preferred_skills: strings(&["docker", "kubernetes"]),
        experience_required: 3,
        education_required: strings(&["bachelor"]),
        responsibilities: strings(&["design and operate backend services"]),
        ..Default::default()
    }
}

/// A requisition from an unrelated discipline.
pub fn design_requisition() -> JobRequisition {
    JobRequisition {
        job_title: Some("Product Designer".to_string()),
        job_category: Some(RoleCategory::Design),
        required_skills: strings(&["figma", "prototyping"]),
        experience_required: 2,
        ..Default::default()
    }
}
