//! Play command implementation - interactive TUI.

use super::CliError;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use market_shifter::gesture::{self, swipe_enabled};
use market_shifter::view::{ColorRole, Controls, ResultSummary, ViewModel, render_chart};
use market_shifter::{
    Action, Curve, GameConfig, Phase, Quiz, Score, Shift, Swipe, SwipeTracker,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

/// How long a swipe's confirmation stays in the footer.
const FLASH_DURATION: Duration = Duration::from_millis(600);

const UCR_BLUE: Color = Color::Rgb(0x2D, 0x6C, 0xC0);
const UCR_GOLD: Color = Color::Rgb(0xF1, 0xAB, 0x00);

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the TUI fails.
pub(crate) fn execute(config: &GameConfig) -> Result<(), CliError> {
    let (quiz, _) = config.start_quiz()?;
    run_tui(App::new(quiz, config.swipe_threshold))
}

/// App state for the TUI.
#[derive(Debug)]
struct App {
    quiz: Quiz,
    tracker: SwipeTracker,
    /// Label of the last swipe and when it happened.
    flash: Option<(&'static str, Instant)>,
    /// Last rejected action, shown until the next successful one.
    status: Option<String>,
}

impl App {
    fn new(quiz: Quiz, swipe_threshold: u32) -> Self {
        Self {
            quiz,
            tracker: SwipeTracker::new(swipe_threshold),
            flash: None,
            status: None,
        }
    }

    fn phase(&self) -> Phase {
        self.quiz.session().phase()
    }

    fn apply(&mut self, action: Action) {
        self.tracker.cancel();
        match self.quiz.apply(action) {
            Ok(()) => self.status = None,
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn swipe(&mut self, swipe: Swipe) {
        match gesture::dispatch(&mut self.quiz, swipe) {
            Ok(Some(action)) => {
                self.status = None;
                self.flash = Some((action_label(action), Instant::now()));
            }
            Ok(None) => {}
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let x = i32::from(mouse.column);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if swipe_enabled(self.phase()) {
                    self.tracker.begin(x);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.tracker.update(x);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(swipe) = self.tracker.end(x) {
                    self.swipe(swipe);
                }
            }
            _ => {}
        }
    }

    fn expire_flash(&mut self) {
        if self
            .flash
            .is_some_and(|(_, at)| at.elapsed() >= FLASH_DURATION)
        {
            self.flash = None;
        }
    }
}

const fn action_label(action: Action) -> &'static str {
    match action {
        Action::SelectCurve(curve) => curve.label(),
        Action::SelectDirection(shift) => shift.label(),
        Action::GoBack => "Back",
        Action::Advance => "Next",
        Action::Restart => "Restart",
    }
}

/// Key bindings. Each phase only binds the actions it accepts.
fn key_action(phase: Phase, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('r')).then_some(Action::Restart);
    }

    match (phase, key.code) {
        (Phase::ChoosingCurve, KeyCode::Left | KeyCode::Char('s' | '1')) => {
            Some(Action::SelectCurve(Curve::Supply))
        }
        (Phase::ChoosingCurve, KeyCode::Right | KeyCode::Char('d' | '2')) => {
            Some(Action::SelectCurve(Curve::Demand))
        }
        (Phase::ChoosingDirection, KeyCode::Left | KeyCode::Char('l' | '1')) => {
            Some(Action::SelectDirection(Shift::Left))
        }
        (Phase::ChoosingDirection, KeyCode::Right | KeyCode::Char('r' | '2')) => {
            Some(Action::SelectDirection(Shift::Right))
        }
        (Phase::ChoosingDirection, KeyCode::Backspace | KeyCode::Char('b')) => {
            Some(Action::GoBack)
        }
        (Phase::ShowingResult, KeyCode::Enter | KeyCode::Char(' ' | 'n')) => Some(Action::Advance),
        (Phase::Complete, KeyCode::Enter | KeyCode::Char('r')) => Some(Action::Restart),
        _ => None,
    }
}

fn is_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
}

fn run_tui(mut app: App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let score = app.quiz.session().score();
    tracing::info!(correct = score.correct, total = score.total, "quit");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<(), CliError> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        app.expire_flash();

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_quit(key) {
                    return Ok(());
                }
                if let Some(action) = key_action(app.phase(), key) {
                    app.apply(action);
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
}

const fn role_color(role: ColorRole) -> Color {
    match role {
        ColorRole::Text => Color::White,
        ColorRole::Muted => Color::DarkGray,
        ColorRole::Axis => Color::Gray,
        ColorRole::Supply => UCR_BLUE,
        ColorRole::Demand => UCR_GOLD,
        ColorRole::Decrease | ColorRole::Incorrect => Color::Red,
        ColorRole::Increase | ColorRole::Correct => Color::Green,
    }
}

fn styled(role: ColorRole) -> Style {
    Style::default().fg(role_color(role))
}

fn bold(role: ColorRole) -> Style {
    styled(role).add_modifier(Modifier::BOLD)
}

fn ui(f: &mut Frame, app: &App) {
    let snapshot = app.quiz.snapshot();
    let view = ViewModel::project(&snapshot);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Card and chart
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], &view);

    if let Controls::PlayAgain { score, percent } = view.controls {
        render_complete(f, chunks[1], view.total, score, percent);
    } else {
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        render_card(f, main_chunks[0], &view, app);
        render_chart_panel(f, main_chunks[1], &view);
    }

    render_footer(f, chunks[2], &view, app);
}

fn render_header(f: &mut Frame, area: Rect, view: &ViewModel<'_>) {
    let title = format!(
        " Market Shifter | Score: {}/{} | Scenario {} / {} ",
        view.score.correct, view.score.total, view.number, view.total
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_card(f: &mut Frame, area: Rect, view: &ViewModel<'_>, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(card) = view.card {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", card.year),
                Style::default().fg(Color::White).bg(UCR_BLUE),
            ),
            Span::raw(" "),
            Span::styled(card.headline.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("[{}]", card.media_source),
            styled(ColorRole::Muted),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(card.description.as_str()));
        lines.push(Line::from(""));
    }

    if let Some(hints) = view.hints {
        let preview = app.tracker.preview();
        let hint = |text: String, role: ColorRole, active: bool| {
            let style = if active {
                bold(role).add_modifier(Modifier::REVERSED)
            } else {
                styled(role)
            };
            Span::styled(text, style)
        };
        lines.push(Line::from(vec![
            hint(
                format!("← {}", hints.left),
                hints.left_role,
                preview == Some(Swipe::Left),
            ),
            Span::raw("   swipe or press   "),
            hint(
                format!("{} →", hints.right),
                hints.right_role,
                preview == Some(Swipe::Right),
            ),
        ]));
        lines.push(Line::from(""));
    }

    if !view.prompt.is_empty() {
        lines.push(Line::from(Span::styled(
            view.prompt,
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }

    control_lines(&mut lines, view.controls);

    if let Some(result) = view.result {
        result_lines(&mut lines, &result);
    }

    let title = if app.tracker.is_dragging() {
        format!(" Scenario  ◀ {:+} ▶ ", app.tracker.offset())
    } else {
        " Scenario ".to_string()
    };

    let card = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });

    f.render_widget(card, area);
}

fn control_lines(lines: &mut Vec<Line<'_>>, controls: Controls) {
    match controls {
        Controls::CurveChoice => {
            lines.push(Line::from(vec![
                Span::styled("[s] ▲ Supply", bold(ColorRole::Supply)),
                Span::raw("     "),
                Span::styled("[d] ▼ Demand", bold(ColorRole::Demand)),
            ]));
        }
        Controls::DirectionChoice { curve } => {
            lines.push(Line::from(vec![
                Span::styled("[b] ↶ ", styled(ColorRole::Muted)),
                Span::styled(
                    format!(" {} ", curve.label()),
                    Style::default()
                        .fg(Color::White)
                        .bg(role_color(ColorRole::for_curve(curve))),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("[l] ← Shift Left", bold(ColorRole::Decrease)),
                Span::styled(" (Decrease)", styled(ColorRole::Muted)),
                Span::raw("   "),
                Span::styled("[r] Shift Right →", bold(ColorRole::Increase)),
                Span::styled(" (Increase)", styled(ColorRole::Muted)),
            ]));
        }
        Controls::Next | Controls::PlayAgain { .. } => {}
    }
}

fn result_lines<'a>(lines: &mut Vec<Line<'a>>, result: &ResultSummary<'a>) {
    let verdict = ColorRole::for_verdict(result.is_correct);
    let mark = if result.is_correct { "✓ " } else { "✗ " };
    lines.push(Line::from(Span::styled(
        format!("{mark}{}", result.verdict()),
        bold(verdict),
    )));

    if let Some(said) = result.you_said() {
        lines.push(Line::from(Span::styled(said, styled(ColorRole::Muted))));
    }

    lines.push(Line::from(vec![
        Span::raw("Answer: "),
        Span::styled(
            result.correct_curve.to_string(),
            bold(ColorRole::for_curve(result.correct_curve)),
        ),
        Span::raw(" → "),
        Span::styled(
            result.correct_shift.to_string(),
            bold(ColorRole::for_shift(result.correct_shift)),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        result.concept,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(result.explanation));
    lines.push(Line::from(Span::styled(
        result.chapter,
        styled(ColorRole::Muted).add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Next Scenario →",
        bold(ColorRole::Supply),
    )));
}

fn render_chart_panel(f: &mut Frame, area: Rect, view: &ViewModel<'_>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Supply & Demand ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(chart) = view.chart else {
        return;
    };

    let grid = render_chart(&chart, inner.width, inner.height.saturating_sub(1));
    let mut lines: Vec<Line> = grid
        .rows()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| {
                        let style = if cell.bold {
                            bold(cell.role)
                        } else {
                            styled(cell.role)
                        };
                        Span::styled(cell.ch.to_string(), style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    if let Some(caption) = chart.caption() {
        lines.push(Line::from(Span::styled(caption, styled(ColorRole::Muted))).centered());
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_complete(
    f: &mut Frame,
    area: Rect,
    total: usize,
    score: Score,
    percent: u32,
) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("✓", bold(ColorRole::Correct))),
        Line::from(Span::styled(
            "Game Complete!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("You've finished all {total} scenarios")),
        Line::from(""),
        Line::from(Span::styled("Final Score", styled(ColorRole::Muted))),
        Line::from(Span::styled(
            format!("{} / {}", score.correct, score.total),
            bold(ColorRole::Supply),
        )),
        Line::from(Span::styled(
            format!("{percent}% correct"),
            styled(ColorRole::Muted),
        )),
        Line::from(""),
        Line::from(Span::styled("[r] Play Again", bold(ColorRole::Supply))),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(panel, area);
}

fn render_footer(f: &mut Frame, area: Rect, view: &ViewModel<'_>, app: &App) {
    let (text, style) = if let Some(status) = &app.status {
        (format!(" {status} "), styled(ColorRole::Incorrect))
    } else if let Some((label, _)) = app.flash {
        (format!(" Swiped: {label} "), bold(ColorRole::Text))
    } else {
        let controls = match view.phase {
            Phase::ChoosingCurve => " [q] Quit  [←/s] Supply  [→/d] Demand  [drag] Swipe  [^R] Restart ",
            Phase::ChoosingDirection => {
                " [q] Quit  [←/l] Left  [→/r] Right  [b] Back  [drag] Swipe  [^R] Restart "
            }
            Phase::ShowingResult => " [q] Quit  [Enter/n] Next  [^R] Restart ",
            Phase::Complete => " [q] Quit  [r] Play Again ",
        };
        (controls.to_string(), Style::default().fg(Color::Gray))
    };

    let footer = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_shifter::Catalog;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(Quiz::new(Catalog::builtin(), 9), 10)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row: 5,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_keys_follow_phase() {
        assert_eq!(
            key_action(Phase::ChoosingCurve, press(KeyCode::Left)),
            Some(Action::SelectCurve(Curve::Supply))
        );
        assert_eq!(
            key_action(Phase::ChoosingDirection, press(KeyCode::Left)),
            Some(Action::SelectDirection(Shift::Left))
        );
        assert_eq!(
            key_action(Phase::ChoosingDirection, press(KeyCode::Char('r'))),
            Some(Action::SelectDirection(Shift::Right))
        );
        assert_eq!(
            key_action(Phase::Complete, press(KeyCode::Char('r'))),
            Some(Action::Restart)
        );
        assert_eq!(
            key_action(Phase::ShowingResult, press(KeyCode::Left)),
            None
        );
        assert_eq!(key_action(Phase::ChoosingCurve, press(KeyCode::Char('b'))), None);
        assert_eq!(
            key_action(
                Phase::ShowingResult,
                KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)
            ),
            Some(Action::Restart)
        );
        assert!(is_quit(press(KeyCode::Esc)));
        assert!(!is_quit(press(KeyCode::Char('d'))));
    }

    #[test]
    fn test_mouse_drag_swipes() {
        let mut app = app();

        // Short drag snaps back.
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 55));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 55));
        assert_eq!(app.phase(), Phase::ChoosingCurve);

        // Long drag right picks demand.
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 70));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 70));
        assert_eq!(app.phase(), Phase::ChoosingDirection);
        assert_eq!(app.quiz.session().pending_curve(), Some(Curve::Demand));
        assert_eq!(app.flash.map(|(label, _)| label), Some("Demand"));

        // Long drag left picks a leftward shift.
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30));
        assert_eq!(app.phase(), Phase::ShowingResult);
        assert_eq!(
            app.quiz.session().answer().map(|a| (a.curve, a.direction)),
            Some((Curve::Demand, Shift::Left))
        );

        // Dragging is disabled on the result card.
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50));
        assert!(!app.tracker.is_dragging());
    }

    #[test]
    fn test_screen_per_phase() {
        let mut app = app();
        let text = screen(&app);
        assert!(text.contains("Market Shifter"));
        assert!(text.contains("Which curve does this affect?"));
        assert!(text.contains("Supply & Demand"));

        app.apply(Action::SelectCurve(Curve::Supply));
        let text = screen(&app);
        assert!(text.contains("Which direction does it shift?"));
        assert!(text.contains("Blue curve will shift"));

        app.apply(Action::SelectDirection(Shift::Right));
        let text = screen(&app);
        assert!(text.contains("Answer:"));
        assert!(text.contains("Next Scenario"));
    }

    #[test]
    fn test_complete_screen_and_restart() {
        let mut app = app();
        while app.phase() != Phase::Complete {
            app.apply(Action::SelectCurve(Curve::Demand));
            app.apply(Action::SelectDirection(Shift::Right));
            app.apply(Action::Advance);
        }
        let text = screen(&app);
        assert!(text.contains("Game Complete!"));
        assert!(text.contains("You've finished all 16 scenarios"));
        assert!(text.contains("6 / 16"));

        app.apply(Action::Restart);
        assert_eq!(app.phase(), Phase::ChoosingCurve);
        assert_eq!(app.quiz.session().score().total, 0);
    }

    #[test]
    fn test_rejected_action_sets_status() {
        let mut app = app();
        app.apply(Action::Advance);
        assert!(app.status.as_deref().is_some_and(|s| s.contains("advance")));
        app.apply(Action::SelectCurve(Curve::Supply));
        assert!(app.status.is_none());
    }
}
