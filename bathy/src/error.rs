use crate::Shape;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BathyError {
    #[error("unknown shape {0}, expected one of {}", shape_names())]
    Shape(String),
}

fn shape_names() -> String {
    let names: Vec<&str> = Shape::all().iter().map(|(name, _)| *name).collect();
    names.join(", ")
}
