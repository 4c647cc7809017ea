use serde::Serialize;

use crate::types::workout::{Coordinates, WorkoutKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerDescriptor {
    pub workout_id: String,
    pub coordinates: Coordinates,
    pub popup_class: String,
    pub content: String,
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailDescriptor {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItemDescriptor {
    pub workout_id: String,
    pub kind: WorkoutKind,
    pub css_class: String,
    pub title: String,
    pub details: Vec<DetailDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormFieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub allows_zero: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormDescriptor {
    pub kind: WorkoutKind,
    pub fields: Vec<FormFieldDescriptor>,
}
