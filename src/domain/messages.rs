//! User-facing texts produced by the search and notification features.

use crate::domain::model::ResultSummary;

/// Text for the results counter above the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMessage {
    AllShown { total: usize },
    NoneShown,
    Subset { visible: usize, total: usize },
}

impl CounterMessage {
    pub fn from_summary(summary: ResultSummary) -> Self {
        // 全部顯示的判斷優先於零筆
        if summary.all_shown() {
            CounterMessage::AllShown {
                total: summary.total,
            }
        } else if summary.none_shown() {
            CounterMessage::NoneShown
        } else {
            CounterMessage::Subset {
                visible: summary.visible,
                total: summary.total,
            }
        }
    }

    pub fn text(&self) -> String {
        match self {
            CounterMessage::AllShown { total } => {
                format!("Mostrando los {} destinos disponibles", total)
            }
            CounterMessage::NoneShown => "No hay destinos que coincidan con los filtros".to_string(),
            CounterMessage::Subset { visible, total } => {
                format!("Mostrando {} de {} destinos", visible, total)
            }
        }
    }

    pub fn html(&self) -> String {
        match self {
            CounterMessage::AllShown { total } => {
                format!("Mostrando los <strong>{}</strong> destinos disponibles", total)
            }
            CounterMessage::NoneShown => {
                r#"<span style="color: var(--accent-color);">No hay destinos que coincidan con los filtros</span>"#
                    .to_string()
            }
            CounterMessage::Subset { visible, total } => format!(
                "Mostrando <strong>{}</strong> de <strong>{}</strong> destinos",
                visible, total
            ),
        }
    }
}

/// Screen-reader message for the outcome of a filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    NoMatches,
    OneMatch,
    Matches(usize),
}

impl Announcement {
    pub fn for_count(visible: usize) -> Self {
        match visible {
            0 => Announcement::NoMatches,
            1 => Announcement::OneMatch,
            n => Announcement::Matches(n),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Announcement::NoMatches => {
                "No se encontraron destinos que coincidan con tu búsqueda".to_string()
            }
            Announcement::OneMatch => "Se encontró 1 destino".to_string(),
            Announcement::Matches(n) => format!("Se encontraron {} destinos", n),
        }
    }
}

/// Content of the lazily created "no results" block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoResultsPlaceholder {
    pub icon: &'static str,
    pub heading: &'static str,
    pub hint: &'static str,
    pub action_label: &'static str,
}

impl Default for NoResultsPlaceholder {
    fn default() -> Self {
        Self {
            icon: "🔍",
            heading: "No se encontraron destinos",
            hint: "Prueba con otros términos de búsqueda o selecciona un continente diferente.",
            action_label: "Limpiar filtros",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn background_color(&self) -> &'static str {
        match self {
            NotificationKind::Info => "#3498db",
            NotificationKind::Success => "#27ae60",
            NotificationKind::Error => "#e74c3c",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}
