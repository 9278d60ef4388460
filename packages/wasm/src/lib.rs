use chrono::{DateTime, Utc};
use pagekit_compiler_html::{render_sections, CompileOptions};
use pagekit_editor::{EditorCommand, EditorStore, SectionPatch};
use pagekit_schema::{
    resolve_variant, PageLayout, PageSection, SchemaError, SectionConfig, SectionType,
    StyleVariant, VariantSectionType, VariantStyles, VariantsConfig, FALLBACK_STYLES,
};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(context: &str, err: impl Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

/// Snapshot of the editor handed to the host UI
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EditorStateView<'a> {
    page_id: Option<&'a str>,
    page_name: Option<&'a str>,
    draft_sections: Vec<&'a PageSection>,
    selected_section_id: Option<&'a str>,
    is_dirty: bool,
    is_saving: bool,
    last_saved_at: Option<String>,
    history_length: usize,
    history_index: Option<usize>,
    can_undo: bool,
    can_redo: bool,
}

/// One editor session. The host creates one per open page tab.
#[wasm_bindgen]
pub struct WasmEditor {
    store: EditorStore,
}

impl Default for WasmEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmEditor {
        WasmEditor {
            store: EditorStore::new(),
        }
    }

    /// Load a page document (`{ id, name, sections }`)
    #[wasm_bindgen(js_name = setPage)]
    pub fn set_page(&mut self, page_json: &str) -> Result<(), JsValue> {
        let layout = PageLayout::from_json(page_json).map_err(|e| js_error("Invalid page", e))?;
        self.store.set_page_layout(layout);
        Ok(())
    }

    #[wasm_bindgen(js_name = selectSection)]
    pub fn select_section(&mut self, section_id: Option<String>) {
        self.store.select_section(section_id.as_deref());
    }

    /// Merge `{ isVisible?, config? }` into a section
    #[wasm_bindgen(js_name = updateSection)]
    pub fn update_section(&mut self, section_id: &str, patch_json: &str) -> Result<bool, JsValue> {
        let patch = self
            .decode_patch(section_id, patch_json)
            .map_err(|e| js_error("Invalid section patch", e))?;
        Ok(match patch {
            Some(patch) => self.store.update_section(section_id, patch),
            None => false,
        })
    }

    #[wasm_bindgen(js_name = updateSectionConfig)]
    pub fn update_section_config(&mut self, section_id: &str, config_json: &str) -> Result<bool, JsValue> {
        let config = self
            .decode_config(section_id, config_json)
            .map_err(|e| js_error("Invalid section config", e))?;
        Ok(match config {
            Some(config) => self.store.update_section_config(section_id, config),
            None => false,
        })
    }

    #[wasm_bindgen(js_name = addSection)]
    pub fn add_section(&mut self, section_json: &str, at_index: Option<u32>) -> Result<(), JsValue> {
        let section: PageSection =
            serde_json::from_str(section_json).map_err(|e| js_error("Invalid section", e))?;
        self.store.add_section(section, at_index.map(|i| i as usize));
        Ok(())
    }

    /// A fresh section of `section_type` as JSON, ready for `addSection`
    #[wasm_bindgen(js_name = newSection)]
    pub fn new_section(&mut self, section_type: &str) -> Result<String, JsValue> {
        let section_type =
            SectionType::from_str(section_type).map_err(|e| js_error("Invalid section type", e))?;
        let section = self.store.new_section(section_type);
        serde_json::to_string(&section).map_err(|e| js_error("Serialization error", e))
    }

    #[wasm_bindgen(js_name = removeSection)]
    pub fn remove_section(&mut self, section_id: &str) -> bool {
        self.store.remove_section(section_id)
    }

    #[wasm_bindgen(js_name = reorderSections)]
    pub fn reorder_sections(&mut self, from_index: u32, to_index: u32) -> bool {
        self.store
            .reorder_sections(from_index as usize, to_index as usize)
    }

    #[wasm_bindgen(js_name = toggleSectionVisibility)]
    pub fn toggle_section_visibility(&mut self, section_id: &str) -> bool {
        self.store.toggle_section_visibility(section_id)
    }

    pub fn undo(&mut self) -> bool {
        self.store.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.store.redo()
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    #[wasm_bindgen(js_name = pushHistory)]
    pub fn push_history(&mut self) {
        self.store.push_history();
    }

    /// Call on field blur after a run of config edits
    pub fn checkpoint(&mut self) -> bool {
        self.store.checkpoint()
    }

    #[wasm_bindgen(js_name = hasPendingChanges)]
    pub fn has_pending_changes(&self) -> bool {
        self.store.has_pending_changes()
    }

    #[wasm_bindgen(js_name = isDirty)]
    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    #[wasm_bindgen(js_name = setSaving)]
    pub fn set_saving(&mut self, is_saving: bool) {
        self.store.set_saving(is_saving);
    }

    /// RFC 3339 timestamp, e.g. from `new Date().toISOString()`
    #[wasm_bindgen(js_name = setLastSavedAt)]
    pub fn set_last_saved_at(&mut self, saved_at: &str) -> Result<(), JsValue> {
        let saved_at = parse_timestamp(saved_at).map_err(|e| js_error("Invalid timestamp", e))?;
        self.store.set_last_saved_at(saved_at);
        Ok(())
    }

    #[wasm_bindgen(js_name = markClean)]
    pub fn mark_clean(&mut self) {
        self.store.mark_clean();
    }

    pub fn reset(&mut self) {
        self.store.reset();
    }

    /// Apply one serialized `EditorCommand`, rejecting stale ids
    pub fn apply(&mut self, command_json: &str) -> Result<(), JsValue> {
        let command: EditorCommand =
            serde_json::from_str(command_json).map_err(|e| js_error("Invalid command", e))?;
        command
            .apply(&mut self.store)
            .map_err(|e| js_error("Command failed", e))
    }

    #[wasm_bindgen(js_name = draftSections)]
    pub fn draft_sections(&self) -> Result<String, JsValue> {
        let sections: Vec<&PageSection> =
            self.store.draft_sections().iter().map(|s| s.as_ref()).collect();
        serde_json::to_string(&sections).map_err(|e| js_error("Serialization error", e))
    }

    pub fn state(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state_view()).map_err(|e| js_error("Serialization error", e))
    }

    /// Preview HTML for the current draft
    #[wasm_bindgen(js_name = renderPreview)]
    pub fn render_preview(&self, variants_json: Option<String>) -> Result<String, JsValue> {
        let variants = parse_variants(variants_json.as_deref())
            .map_err(|e| js_error("Invalid variants", e))?;
        let options = CompileOptions {
            variants,
            ..Default::default()
        };
        Ok(render_sections(self.store.draft_sections(), &options))
    }
}

impl WasmEditor {
    fn state_view(&self) -> EditorStateView<'_> {
        EditorStateView {
            page_id: self.store.page_id(),
            page_name: self.store.page_name(),
            draft_sections: self.store.draft_sections().iter().map(|s| s.as_ref()).collect(),
            selected_section_id: self.store.selected_section_id(),
            is_dirty: self.store.is_dirty(),
            is_saving: self.store.is_saving(),
            last_saved_at: self.store.last_saved_at().map(|t| t.to_rfc3339()),
            history_length: self.store.history().len(),
            history_index: self.store.history_index(),
            can_undo: self.store.can_undo(),
            can_redo: self.store.can_redo(),
        }
    }

    /// `Ok(None)` when the section does not exist
    fn decode_config(&self, section_id: &str, config_json: &str) -> Result<Option<SectionConfig>, SchemaError> {
        let raw: Value = serde_json::from_str(config_json)?;
        self.config_for(section_id, raw)
    }

    fn config_for(&self, section_id: &str, raw: Value) -> Result<Option<SectionConfig>, SchemaError> {
        match self.store.section(section_id) {
            Some(section) => Ok(Some(SectionConfig::from_parts(
                section_id,
                section.type_name(),
                raw,
            )?)),
            None => Ok(None),
        }
    }

    fn decode_patch(&self, section_id: &str, patch_json: &str) -> Result<Option<SectionPatch>, SchemaError> {
        let mut raw: Value = serde_json::from_str(patch_json)?;
        if self.store.section(section_id).is_none() {
            return Ok(None);
        }

        let mut patch = SectionPatch::new();
        patch.is_visible = raw
            .get_mut("isVisible")
            .map(Value::take)
            .filter(|value| !value.is_null())
            .map(serde_json::from_value::<bool>)
            .transpose()?;
        if let Some(config) = raw.get_mut("config").map(Value::take) {
            patch.config = self.config_for(section_id, config)?;
        }
        Ok(Some(patch))
    }
}

fn parse_variants(json: Option<&str>) -> Result<Option<VariantsConfig>, serde_json::Error> {
    json.map(serde_json::from_str).transpose()
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

fn render_sections_json(sections_json: &str, variants_json: Option<&str>) -> Result<String, SchemaError> {
    let sections: Vec<PageSection> = serde_json::from_str(sections_json)?;
    let options = CompileOptions {
        variants: parse_variants(variants_json)?,
        ..Default::default()
    };
    Ok(render_sections(&sections, &options))
}

/// Resolve style tokens; unknown types get the fallback bundle
fn resolve_styles(
    section_type: &str,
    variant: Option<&str>,
    variants_json: Option<&str>,
) -> Result<&'static VariantStyles, serde_json::Error> {
    let config = parse_variants(variants_json)?;
    let variant = variant.map(StyleVariant::from);

    Ok(match VariantSectionType::from_str(section_type) {
        Ok(section_type) => resolve_variant(section_type, variant.as_ref(), config.as_ref()),
        Err(_) => &FALLBACK_STYLES,
    })
}

/// Render a JSON array of sections to HTML
#[wasm_bindgen(js_name = renderSections)]
pub fn render_sections_js(sections_json: &str, variants_json: Option<String>) -> Result<String, JsValue> {
    render_sections_json(sections_json, variants_json.as_deref())
        .map_err(|e| js_error("Render error", e))
}

/// Resolve a section type's style tokens, returned as JSON
#[wasm_bindgen(js_name = resolveVariant)]
pub fn resolve_variant_js(
    section_type: &str,
    variant: Option<String>,
    variants_json: Option<String>,
) -> Result<String, JsValue> {
    let styles = resolve_styles(section_type, variant.as_deref(), variants_json.as_deref())
        .map_err(|e| js_error("Invalid variants", e))?;
    serde_json::to_string(styles).map_err(|e| js_error("Serialization error", e))
}

/// The section library as `[{ type, label }]`
#[wasm_bindgen(js_name = sectionTypes)]
pub fn section_types_js() -> String {
    let types: Vec<Value> = SectionType::ALL
        .iter()
        .map(|t| serde_json::json!({ "type": t.as_str(), "label": t.label() }))
        .collect();
    Value::Array(types).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "id": "home",
        "name": "Home",
        "sections": [
            { "id": "hero", "type": "hero", "order": 0 },
            { "id": "faq", "type": "faq", "order": 1 }
        ]
    }"#;

    fn editor() -> WasmEditor {
        let mut editor = WasmEditor::new();
        editor.set_page(PAGE).unwrap();
        editor
    }

    fn state(editor: &WasmEditor) -> Value {
        serde_json::from_str(&editor.state().unwrap()).unwrap()
    }

    #[test]
    fn test_editor_session() {
        let mut editor = editor();

        assert!(editor.toggle_section_visibility("faq"));
        assert!(editor.can_undo());

        let state = state(&editor);
        assert_eq!(state["pageId"], "home");
        assert_eq!(state["isDirty"], true);
        assert_eq!(state["historyLength"], 2);
        assert_eq!(state["draftSections"][1]["isVisible"], false);

        assert!(editor.undo());
        assert!(editor.can_redo());
    }

    #[test]
    fn test_update_section_config_and_checkpoint() {
        let mut editor = editor();

        let changed = editor
            .update_section_config("faq", r#"{ "title": "Questions" }"#)
            .unwrap();
        assert!(changed);
        assert!(editor.has_pending_changes());
        assert!(editor.checkpoint());

        let sections: Value = serde_json::from_str(&editor.draft_sections().unwrap()).unwrap();
        assert_eq!(sections[1]["config"]["title"], "Questions");

        assert!(!editor.update_section_config("ghost", "{}").unwrap());
    }

    #[test]
    fn test_update_section_patch() {
        let mut editor = editor();

        let changed = editor
            .update_section("hero", r#"{ "isVisible": false, "config": { "headline": "Hi" } }"#)
            .unwrap();
        assert!(changed);

        let state = state(&editor);
        assert_eq!(state["draftSections"][0]["isVisible"], false);
        assert_eq!(state["draftSections"][0]["config"]["headline"], "Hi");
        assert_eq!(state["historyLength"], 2);
    }

    #[test]
    fn test_update_section_patch_rejects_non_bool_visibility() {
        let editor = editor();

        assert!(editor.decode_patch("hero", r#"{ "isVisible": "yes" }"#).is_err());
        assert!(editor.decode_patch("hero", r#"{ "isVisible": 0 }"#).is_err());

        let patch = editor
            .decode_patch("hero", r#"{ "isVisible": null }"#)
            .unwrap()
            .expect("hero exists");
        assert_eq!(patch.is_visible, None);
    }

    #[test]
    fn test_new_and_add_section() {
        let mut editor = editor();

        let section = editor.new_section("stats_bar").unwrap();
        editor.add_section(&section, Some(0)).unwrap();

        let state = state(&editor);
        assert_eq!(state["draftSections"][0]["type"], "stats_bar");
        assert_eq!(state["draftSections"][0]["order"], 0);
        assert_eq!(state["selectedSectionId"], state["draftSections"][0]["id"]);
    }

    #[test]
    fn test_saving_bookkeeping() {
        let mut editor = editor();
        editor.toggle_section_visibility("hero");
        editor.set_saving(true);
        editor.set_last_saved_at("2026-10-16T12:00:00Z").unwrap();
        editor.set_saving(false);
        editor.mark_clean();

        let state = state(&editor);
        assert_eq!(state["isDirty"], false);
        assert_eq!(state["isSaving"], false);
        assert_eq!(state["lastSavedAt"], "2026-10-16T12:00:00+00:00");
    }

    #[test]
    fn test_reset() {
        let mut editor = editor();
        editor.reset();

        let state = state(&editor);
        assert!(state["pageId"].is_null());
        assert_eq!(state["historyLength"], 0);
    }

    #[test]
    fn test_render_sections() {
        let html = render_sections_json(
            r#"[{ "id": "x", "type": "unknown_type_xyz", "order": 0, "isVisible": true, "config": {} }]"#,
            None,
        )
        .unwrap();
        assert!(html.contains("section-placeholder-unknown_type_xyz"));

        let preview = editor().render_preview(None).unwrap();
        assert!(preview.contains("data-section-id=\"hero\""));
    }

    #[test]
    fn test_resolve_styles() {
        let explicit = resolve_styles("hero", Some("variantA"), None).unwrap();
        assert_eq!(
            explicit,
            resolve_variant(VariantSectionType::Hero, Some(&StyleVariant::A), None)
        );

        let fallback = resolve_styles("lead_form", None, None).unwrap();
        assert_eq!(fallback, &FALLBACK_STYLES);

        let configured = resolve_styles("faq", None, Some(r#"{ "faq": "variantB" }"#)).unwrap();
        assert_eq!(
            configured,
            resolve_variant(VariantSectionType::Faq, Some(&StyleVariant::B), None)
        );

        assert!(resolve_variant_js("hero", None, None).unwrap().contains("spacing"));
    }

    #[test]
    fn test_section_types() {
        let types: Value = serde_json::from_str(&section_types_js()).unwrap();
        assert_eq!(types.as_array().unwrap().len(), 12);
        assert_eq!(types[0]["type"], "hero");
    }
}
