//! School enrollment records: courses, their classes and enrolled students.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub name: String,
    pub birthdate: String,
    pub register_id: String,
    pub document: String,
    pub status: StudentStatus,
}

/// A weekly meeting slot of a class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTime {
    pub date_time: String,
    pub day_of_week: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolClass {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub times: Vec<ClassTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_list: Option<Vec<SchoolClass>>,
}

/// One enrollment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolData {
    pub id: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_list: Option<Vec<Course>>,
}

/// Request body for creating or updating an enrollment record.
///
/// On update, an absent `courseList` keeps the stored one.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SchoolDataRequest {
    #[serde(default)]
    pub course_list: Option<Vec<Course>>,
}
