use contracts::common::ListResponse;
use contracts::domain::skill::{EmployeeSkill, EmployeeSkillDto, Skill, SkillDto};

use crate::shared::api_utils::{delete, get_json, post_json, put_json};
use crate::shared::resource::build_query;

pub async fn list(category: String) -> Result<Vec<Skill>, String> {
    let query = build_query(&[("category", category)]);
    let response: ListResponse<Skill> = get_json(&format!("/api/skills{}", query)).await?;
    Ok(response.items)
}

pub async fn save(dto: SkillDto) -> Result<Skill, String> {
    match &dto.id {
        Some(id) => put_json(&format!("/api/skills/{}", id), &dto).await,
        None => post_json("/api/skills", &dto).await,
    }
}

pub async fn remove(id: String) -> Result<(), String> {
    delete(&format!("/api/skills/{}", id)).await
}

pub async fn list_employee_skills() -> Result<Vec<EmployeeSkill>, String> {
    let response: ListResponse<EmployeeSkill> = get_json("/api/skills/employee-skills").await?;
    Ok(response.items)
}

pub async fn save_employee_skill(dto: EmployeeSkillDto) -> Result<EmployeeSkill, String> {
    post_json("/api/skills/employee-skills", &dto).await
}
