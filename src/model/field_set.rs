/// Fields recovered from one debug panel.
///
/// Every member is independently optional: a label the model omitted (or
/// garbled) stays `None` and leaves the corresponding state field alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    pub integrity_score: Option<i32>,
    pub level: Option<i32>,

    /// `Some(vec![])` is the explicit "None" sentinel from the panel
    /// (no new contradictions this turn), distinct from the label being
    /// absent entirely.
    pub contradictions: Option<Vec<String>>,
}

impl FieldSet {
    pub fn is_empty(&self) -> bool {
        self.integrity_score.is_none() && self.level.is_none() && self.contradictions.is_none()
    }
}
