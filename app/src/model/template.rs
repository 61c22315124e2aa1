use atolye_backend::Document;
use serde::{Deserialize, Serialize};

/// A WhatsApp-style message template, stored in the `templates`
/// collection. Content may contain `{{identifier}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub content: String,
}

impl Template {
    /// The record a freshly added template starts from.
    pub fn new_default() -> Self {
        Self {
            id: String::new(),
            name: "Yeni Şablon".to_string(),
            content: "Merhaba {{yetkili}}, ...".to_string(),
        }
    }
}

impl Document for Template {
    const COLLECTION: &'static str = "templates";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// An insertable placeholder, with its editor button label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariable {
    pub key: String,
    pub label: String,
}

impl TemplateVariable {
    /// The literal token as it appears in template content.
    pub fn placeholder(&self) -> String {
        format!("{{{{{}}}}}", self.key)
    }
}

/// The fixed placeholder set, in editor display order.
pub fn template_variables() -> Vec<TemplateVariable> {
    [
        ("yetkili", "Yetkili Adı"),
        ("atolye", "Atölye Adı"),
        ("siparis_no", "Sipariş No"),
        ("urun_tipi", "Ürün Tipi"),
        ("tarih", "Tarih"),
    ]
    .into_iter()
    .map(|(key, label)| TemplateVariable {
        key: key.to_string(),
        label: label.to_string(),
    })
    .collect()
}

fn sample_value(key: &str) -> Option<&'static str> {
    match key {
        "yetkili" => Some("Ahmet Bey"),
        "atolye" => Some("Altınbaş Atölye"),
        "siparis_no" => Some("12345"),
        "urun_tipi" => Some("22 Ayar Bilezik"),
        "tarih" => Some("15.02.2026"),
        _ => None,
    }
}

/// Renders template content against the fixed sample data.
///
/// Pure and total: known placeholders are substituted, unknown ones and
/// unterminated braces pass through literally.
pub fn render_preview(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find("}}") else {
            out.push_str(tail);
            return out;
        };
        let token = &tail[..end + 2];
        match sample_value(&token[2..token.len() - 2]) {
            Some(value) => out.push_str(value),
            None => out.push_str(token),
        }
        rest = &tail[end + 2..];
    }
    out.push_str(rest);
    out
}
