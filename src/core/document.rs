use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(String),
    Columns(Vec<Column>),
    Enumerated(Vec<Entry>),
    Described(Vec<Entry>),
    Figure(Figure),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub heading: String,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub label: String,
    pub body: String,
}

impl Entry {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }

    pub fn line(&self) -> String {
        format!("{}: {}", self.label, self.body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub path: PathBuf,
    pub title: String,
    pub show_caption: bool,
}
