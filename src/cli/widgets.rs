//! Static widget showcase rendered to the terminal.
//!
//! The page is a fixed list of stateless widgets. Nothing is interactive; the
//! point is to show each widget drawn with the page theme applied.

use console::{Style, measure_text_width};

const SLIDER_TRACK_WIDTH: usize = 30;

/// Styling injected once for the whole page.
#[derive(Debug, Clone)]
pub struct Theme {
    pub base: Style,
    pub accent: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            base: Style::new().black().on_white(),
            accent: Style::new().blue().on_white().bold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Heading(String),
    Text(String),
    Button {
        label: String,
    },
    Checkbox {
        label: String,
        checked: bool,
    },
    Slider {
        label: String,
        min: i64,
        max: i64,
        value: i64,
    },
    TextInput {
        label: String,
        value: String,
    },
}

impl Widget {
    /// Plain text lines for this widget, without theme styling.
    pub fn render_lines(&self) -> Vec<String> {
        match self {
            Widget::Heading(text) | Widget::Text(text) => vec![text.clone()],
            Widget::Button { label } => {
                let border = "─".repeat(label.chars().count() + 2);
                vec![
                    format!("╭{border}╮"),
                    format!("│ {label} │"),
                    format!("╰{border}╯"),
                ]
            }
            Widget::Checkbox { label, checked } => {
                let mark = if *checked { "x" } else { " " };
                vec![format!("[{mark}] {label}")]
            }
            Widget::Slider {
                label,
                min,
                max,
                value,
            } => {
                let span = (max - min).max(1);
                let offset = (value - min).clamp(0, span);
                let knob = (offset as usize * (SLIDER_TRACK_WIDTH - 1)) / span as usize;
                let track: String = (0..SLIDER_TRACK_WIDTH)
                    .map(|i| match i.cmp(&knob) {
                        std::cmp::Ordering::Less => '━',
                        std::cmp::Ordering::Equal => '●',
                        std::cmp::Ordering::Greater => '─',
                    })
                    .collect();
                vec![label.clone(), format!("{min} {track} {max}  ({value})")]
            }
            Widget::TextInput { label, value } => {
                let width = value.chars().count().max(20) + 2;
                let border = "─".repeat(width);
                vec![
                    label.clone(),
                    format!("┌{border}┐"),
                    format!("│ {value:<inner$} │", inner = width - 2),
                    format!("└{border}┘"),
                ]
            }
        }
    }

    fn is_emphasized(&self) -> bool {
        matches!(self, Widget::Heading(_))
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub theme: Theme,
    pub widgets: Vec<Widget>,
}

impl Page {
    /// The fixed demo page.
    pub fn demo() -> Self {
        Page {
            title: "Widget Demo".to_string(),
            theme: Theme::default(),
            widgets: vec![
                Widget::Heading("Hello Widgets! 👋".to_string()),
                Widget::Text("This is a really simple widget demo.".to_string()),
                Widget::Button {
                    label: "Click Me!".to_string(),
                },
                Widget::Checkbox {
                    label: "Check this out".to_string(),
                    checked: false,
                },
                Widget::Slider {
                    label: "Select a value".to_string(),
                    min: 0,
                    max: 100,
                    value: 25,
                },
                Widget::TextInput {
                    label: "Enter your name".to_string(),
                    value: "John Doe".to_string(),
                },
            ],
        }
    }

    /// Renders the page centered in a terminal `width` columns wide.
    pub fn render(&self, width: usize) -> String {
        let mut lines: Vec<(String, &Style)> =
            vec![(self.title.to_uppercase(), &self.theme.accent), (String::new(), &self.theme.base)];

        for widget in &self.widgets {
            let style = if widget.is_emphasized() {
                &self.theme.accent
            } else {
                &self.theme.base
            };
            lines.extend(widget.render_lines().into_iter().map(|line| (line, style)));
            lines.push((String::new(), &self.theme.base));
        }

        let content_width = lines
            .iter()
            .map(|(line, _)| measure_text_width(line))
            .max()
            .unwrap_or(0);

        let indent = width.saturating_sub(content_width) / 2;

        lines
            .into_iter()
            .map(|(line, style)| {
                let padding = content_width - measure_text_width(&line);
                let body = format!("{line}{}", " ".repeat(padding));
                format!("{}{}", " ".repeat(indent), style.apply_to(body))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn run() -> anyhow::Result<()> {
    let page = Page::demo();
    tracing::debug!(title = %page.title, widgets = page.widgets.len(), "Rendering widget page");
    println!("{}", page.render(super::ui::term_width()));
    Ok(())
}
