// Theme specific configurations (colors and the stylesheet built from them)
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub header: String,
    pub card: String,
    pub card_total: String,
    pub text: String,
    pub text_muted: String,
    pub text_on_total: String,
    pub income: String,
    pub outcome: String,
}

impl ThemePalette {
    pub fn default_light() -> Self {
        Self {
            background: "#f0f2f5".to_string(),
            header: "#5636d3".to_string(),
            card: "#ffffff".to_string(),
            card_total: "#ff872c".to_string(),
            text: "#363f5f".to_string(),
            text_muted: "#969cb3".to_string(),
            text_on_total: "#ffffff".to_string(),
            income: "#12a454".to_string(),
            outcome: "#e83f5b".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            header: "#2d2a4a".to_string(),
            card: "#2b2b2b".to_string(),
            card_total: "#c2661f".to_string(),
            text: "#d1d4dc".to_string(),
            text_muted: "#8a8f9e".to_string(),
            text_on_total: "#ffffff".to_string(),
            income: "#26a69a".to_string(),
            outcome: "#ef5350".to_string(),
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::default_dark(),
            Theme::Light => Self::default_light(),
        }
    }

    // Stylesheet injected once by the app root. The `.income` / `.outcome`
    // classes match `TransactionType::as_str`.
    pub fn stylesheet(&self) -> String {
        format!(
            r#"
body {{ margin: 0; background: {background}; color: {text}; font-family: Poppins, sans-serif; }}
.header {{ background: {header}; color: #ffffff; padding: 30px 20px 150px; }}
.header h1 {{ margin: 0 auto; max-width: 1120px; font-size: 24px; }}
.container {{ width: 100%; max-width: 1120px; margin: 0 auto; padding: 40px 20px; box-sizing: border-box; }}
.card-container {{ display: grid; grid-template-columns: repeat(3, 1fr); grid-gap: 32px; margin-top: -150px; }}
.card {{ background: {card}; padding: 22px 32px; border-radius: 5px; color: {text}; }}
.card.total {{ background: {card_total}; color: {text_on_total}; }}
.card header {{ display: flex; align-items: center; justify-content: space-between; }}
.card header p {{ font-size: 16px; }}
.card h1 {{ margin-top: 14px; font-size: 36px; font-weight: normal; line-height: 54px; }}
.card h1.unavailable {{ font-size: 20px; opacity: 0.7; }}
.card .icon {{ font-size: 24px; }}
.table-container {{ margin-top: 64px; }}
.table-container table {{ width: 100%; border-spacing: 0 8px; }}
.table-container th {{ color: {text_muted}; font-weight: normal; padding: 20px 32px; text-align: left; font-size: 16px; }}
.table-container td {{ padding: 20px 32px; border: 0; background: {card}; font-size: 16px; color: {text_muted}; }}
.table-container td.title {{ color: {text}; }}
.table-container td.income {{ color: {income}; }}
.table-container td.outcome {{ color: {outcome}; }}
.table-container td:first-child {{ border-radius: 8px 0 0 8px; }}
.table-container td:last-child {{ border-radius: 0 8px 8px 0; }}
.status {{ padding: 20px 32px; border-radius: 5px; background: {card}; }}
.status.error {{ color: {outcome}; }}
.skipped-notice {{ color: {text_muted}; font-size: 14px; }}
"#,
            background = self.background,
            header = self.header,
            card = self.card,
            card_total = self.card_total,
            text = self.text,
            text_muted = self.text_muted,
            text_on_total = self.text_on_total,
            income = self.income,
            outcome = self.outcome,
        )
    }
}
