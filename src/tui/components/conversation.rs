//! # Conversation Component
//!
//! The detail view for an open chat: contact header, two static
//! voice-message bubbles, and the recording control area. The bubbles
//! are placeholders: their waveforms are generated once when the
//! conversation opens and their durations are fixed labels, not data.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::core::chat::{Chat, initials};
use crate::core::recording::format_elapsed;
use crate::tui::component::Component;
use crate::tui::components::waveform;
use crate::tui::theme::Theme;

/// Pulse intensity threshold above which the REC marker turns BOLD.
const PULSE_BOLD_THRESHOLD: f32 = 0.6;
/// Pulse intensity threshold below which the REC marker dims.
const PULSE_DIM_THRESHOLD: f32 = 0.2;

const CONTACT_HEADER_HEIGHT: u16 = 3;
const CONTROLS_IDLE_HEIGHT: u16 = 3;
const CONTROLS_RECORDING_HEIGHT: u16 = 7;
const BUBBLE_HEIGHT: u16 = 3;

/// Waveforms for the two placeholder bubbles, drawn once per open.
pub struct ConversationState {
    pub bubble_out: Vec<f32>,
    pub bubble_in: Vec<f32>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self {
            bubble_out: waveform::random_heights(waveform::BUBBLE_BARS),
            bubble_in: waveform::random_heights(waveform::BUBBLE_BARS),
        }
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

/// The open-chat view.
/// Created fresh each frame with references to state and data.
pub struct Conversation<'a> {
    /// The open chat. `None` for an unknown id; the header renders
    /// empty instead of failing.
    pub chat: Option<&'a Chat>,
    pub recording: bool,
    pub elapsed_ticks: u32,
    pub audio_level: f32,
    /// Animation phase for the REC marker, 0.0 to 1.0.
    pub pulse_value: f32,
    /// Bars in the live waveform (config).
    pub waveform_bars: u16,
    pub state: &'a ConversationState,
    pub theme: &'a Theme,
}

impl Component for Conversation<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let controls_height = if self.recording {
            CONTROLS_RECORDING_HEIGHT
        } else {
            CONTROLS_IDLE_HEIGHT
        };
        let [header_area, messages_area, controls_area] = Layout::vertical([
            Constraint::Length(CONTACT_HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(controls_height),
        ])
        .areas(area);

        self.render_contact_header(frame, header_area);
        self.render_bubbles(frame, messages_area);
        if self.recording {
            self.render_recording_panel(frame, controls_area);
        } else {
            self.render_idle_panel(frame, controls_area);
        }
    }
}

impl Conversation<'_> {
    fn render_contact_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let muted = Style::default().fg(self.theme.muted);
        let mut first = vec![Span::styled("← Esc  ", muted)];
        let mut lines = Vec::new();

        if let Some(chat) = self.chat {
            first.push(Span::styled(
                format!("{:<3}", initials(&chat.name)),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            first.push(Span::styled(
                chat.name.as_str(),
                Style::default().fg(self.theme.fg).add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::from(first));
            lines.push(Line::from(Span::styled("        online", muted)));
        } else {
            // Unknown id: header stays safely empty
            lines.push(Line::from(first));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_bubbles(&self, frame: &mut Frame, area: Rect) {
        if area.height < BUBBLE_HEIGHT {
            return;
        }

        let bubble_width = area.width.saturating_sub(4).min(32);
        if bubble_width < 12 {
            return;
        }

        // Outgoing, right-aligned
        let out_rect = Rect::new(
            area.right().saturating_sub(bubble_width + 1),
            area.y,
            bubble_width,
            BUBBLE_HEIGHT,
        );
        self.render_bubble(frame, out_rect, &self.state.bubble_out, "0:15", self.theme.bubble_out);

        // Incoming, left-aligned below
        if area.height >= BUBBLE_HEIGHT * 2 + 1 {
            let in_rect = Rect::new(area.x + 1, area.y + BUBBLE_HEIGHT + 1, bubble_width, BUBBLE_HEIGHT);
            self.render_bubble(frame, in_rect, &self.state.bubble_in, "0:23", self.theme.bubble_in);
        }
    }

    fn render_bubble(
        &self,
        frame: &mut Frame,
        rect: Rect,
        heights: &[f32],
        duration: &str,
        color: ratatui::style::Color,
    ) {
        let style = Style::default().fg(color);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style);

        // "▶ " + bars + " m:ss", bars trimmed to whatever fits
        let fixed = 2 + duration.len() as u16 + 1;
        let bar_room = rect.width.saturating_sub(2 + fixed) as usize;
        let bars = &heights[..heights.len().min(bar_room)];

        let mut line = vec![Span::styled("▶ ", style.add_modifier(Modifier::BOLD))];
        line.extend(waveform::bars_line(bars, style).spans);
        line.push(Span::styled(
            format!(" {duration}"),
            Style::default().fg(self.theme.muted),
        ));

        frame.render_widget(Paragraph::new(Line::from(line)).block(block), rect);
    }

    fn render_idle_panel(&self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let hint = Line::from(vec![
            Span::styled("● ", Style::default().fg(self.theme.accent)),
            Span::styled(
                "Space to record · Esc to go back",
                Style::default().fg(self.theme.muted),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(hint).alignment(Alignment::Center),
            inner,
        );
    }

    fn render_recording_panel(&self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(self.theme.accent));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let accent = Style::default().fg(self.theme.accent);
        let rec_style = if self.pulse_value > PULSE_BOLD_THRESHOLD {
            accent.add_modifier(Modifier::BOLD)
        } else if self.pulse_value < PULSE_DIM_THRESHOLD {
            accent.add_modifier(Modifier::DIM)
        } else {
            accent
        };

        let bars = self.waveform_bars.min(inner.width.saturating_sub(2)) as usize;
        let heights = waveform::recording_heights(self.audio_level, bars);

        let lines = vec![
            Line::from(Span::styled(
                format_elapsed(self.elapsed_ticks),
                Style::default().fg(self.theme.fg).add_modifier(Modifier::BOLD),
            )),
            waveform::bars_line(&heights, accent),
            Line::from(Span::styled("● REC", rec_style)),
            Line::from(Span::styled(
                "Space send · x cancel",
                Style::default().fg(self.theme.muted),
            )),
        ];

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            inner,
        );
    }
}
