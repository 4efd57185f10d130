use std::sync::Arc;

use super::ModeId;

/// The text-editing component the session drives. Implementations own the
/// widget's mode registry; a mode must be registered before it is activated.
pub trait EditorWidget: Send + Sync {
    fn register_mode(&self, mode: &ModeId, asset: String);
    fn has_mode(&self, mode: &ModeId) -> bool;
    fn set_mode(&self, mode: &ModeId);
    fn mode(&self) -> Option<ModeId>;
    fn set_value(&self, text: &str);
    fn value(&self) -> String;
}

pub type EditorWidgetArc = Arc<dyn EditorWidget>;
