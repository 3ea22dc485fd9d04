use dino_compare::{compose_cards, Card, Catalog, Config, FormInput, PageError, DIET_OPTIONS};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::Rng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

/// Tiles per grid row
const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Form,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Feet,
    Inches,
    Weight,
    Diet,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Name, Field::Feet, Field::Inches, Field::Weight, Field::Diet];

    pub fn next(&self) -> Self {
        match self {
            Field::Name => Field::Feet,
            Field::Feet => Field::Inches,
            Field::Inches => Field::Weight,
            Field::Weight => Field::Diet,
            Field::Diet => Field::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Field::Name => Field::Diet,
            Field::Feet => Field::Name,
            Field::Inches => Field::Feet,
            Field::Weight => Field::Inches,
            Field::Diet => Field::Weight,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Field::Name => "Name",
            Field::Feet => "Height (feet)",
            Field::Inches => "Height (inches)",
            Field::Weight => "Weight (lbs)",
            Field::Diet => "Diet",
        }
    }
}

pub struct App {
    pub catalog: Catalog,
    pub config: Config,
    pub form: FormInput,
    pub focus: Field,
    pub current_page: Page,
    pub cards: Vec<Card>,
}

impl App {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            catalog,
            config,
            form: FormInput {
                diet: DIET_OPTIONS[0].to_string(),
                ..FormInput::default()
            },
            focus: Field::Name,
            current_page: Page::Form,
            cards: Vec::new(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.form.name,
            Field::Feet => &self.form.feet,
            Field::Inches => &self.form.inches,
            Field::Weight => &self.form.weight,
            Field::Diet => &self.form.diet,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.form.name,
            Field::Feet => &mut self.form.feet,
            Field::Inches => &mut self.form.inches,
            Field::Weight => &mut self.form.weight,
            Field::Diet => &mut self.form.diet,
        }
    }

    pub fn type_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn previous_field(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Step through the diet choices (only on the diet field)
    pub fn cycle_diet(&mut self, forward: bool) {
        if self.focus != Field::Diet {
            return;
        }

        let len = DIET_OPTIONS.len();
        let current = DIET_OPTIONS
            .iter()
            .position(|d| d.eq_ignore_ascii_case(&self.form.diet));
        let i = match current {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.form.diet = DIET_OPTIONS[i].to_string();
    }

    /// Swap the form for the grid. Only works once.
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PageError> {
        if self.current_page == Page::Results {
            return Err(PageError::AlreadySubmitted);
        }

        let person = self.form.to_person();
        self.cards = compose_cards(self.catalog.creatures(), &person, self.config.person_slot, rng);
        self.current_page = Page::Results;
        Ok(())
    }

    /// Grid position of the person's card
    pub fn person_index(&self) -> Option<usize> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.config.person_slot.min(self.cards.len() - 1))
        }
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.current_page {
            Page::Form => match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Enter => {
                    // Only fails once results are up, which this page never is
                    let _ = app.submit(&mut rng);
                }
                KeyCode::Tab | KeyCode::Down => app.next_field(),
                KeyCode::BackTab | KeyCode::Up => app.previous_field(),
                KeyCode::Left => app.cycle_diet(false),
                KeyCode::Right => app.cycle_diet(true),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Char(c) => app.type_char(c),
                _ => {}
            },
            Page::Results => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                _ => {}
            },
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form or grid
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::Form => render_form(f, chunks[1], app),
        Page::Results => render_grid(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let spans = vec![
        Span::styled(
            "Dinosaurs",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled("How do you compare?", Style::default().fg(Color::White)),
        Span::raw("  |  "),
        Span::styled(
            format!("{} creatures loaded", app.catalog.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let header = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];

    for field in Field::ALL {
        let focused = field == app.focus;
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let marker = if focused { "→ " } else { "  " };

        let mut value = app.field(field).to_string();
        if field == Field::Diet {
            value = format!("◀ {} ▶", value);
        } else if focused {
            value.push('_');
        }

        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{:<18}", field.label()), label_style),
            Span::styled(value, Style::default().fg(Color::White)),
        ]));
        lines.push(Line::from(""));
    }

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Compare Me! "),
    );

    f.render_widget(form, area);
}

fn render_grid(f: &mut Frame, area: Rect, app: &App) {
    if app.cards.is_empty() {
        return;
    }

    let rows = app.cards.len().div_ceil(GRID_COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    let person_index = app.person_index();

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            if let Some(card) = app.cards.get(index) {
                render_card(f, *cell, card, Some(index) == person_index, &app.config.image_prefix);
            }
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &Card, is_person: bool, image_prefix: &str) {
    let border_color = if is_person { Color::Yellow } else { Color::Green };

    let mut lines = vec![Line::from(Span::styled(
        format!("{}{}", image_prefix, card.image),
        Style::default().fg(Color::DarkGray),
    ))];
    if let Some(fact) = &card.fact {
        lines.push(Line::from(""));
        lines.push(Line::from(fact.as_str()));
    }

    let title = format!(" {} ", truncate(&card.heading, area.width.saturating_sub(4) as usize));
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(title),
        );

    f.render_widget(paragraph, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Yellow);

    let spans = match app.current_page {
        Page::Form => vec![
            Span::styled("Tab/↑/↓", key),
            Span::raw(" Field | "),
            Span::styled("←/→", key),
            Span::raw(" Diet | "),
            Span::styled("Enter", key),
            Span::raw(" Compare | "),
            Span::styled("Esc", key),
            Span::raw(" Quit"),
        ],
        Page::Results => vec![
            Span::styled(
                format!(" {} tiles ", app.cards.len()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(" | "),
            Span::styled("q", key),
            Span::raw(" Quit"),
        ],
    };

    let status_bar = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dino_compare::Creature;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn app_with(n: usize) -> App {
        let creatures = (0..n)
            .map(|i| Creature::new(format!("Dino{}", i), 100.0, 50.0, "herbavor", "Here", "Then", "Trivia"))
            .collect();
        App::new(Catalog::new(creatures), Config::default())
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut app = app_with(0);

        for c in "Ada".chars() {
            app.type_char(c);
        }
        app.next_field();
        app.type_char('5');
        app.next_field();
        app.type_char('6');
        app.type_char('7');
        app.backspace();

        assert_eq!(app.form.name, "Ada");
        assert_eq!(app.form.feet, "5");
        assert_eq!(app.form.inches, "6");
        assert_eq!(app.form.to_person().being.height, 66.0);
    }

    #[test]
    fn test_field_cycle_wraps() {
        let mut app = app_with(0);

        app.previous_field();
        assert_eq!(app.focus, Field::Diet);
        app.next_field();
        assert_eq!(app.focus, Field::Name);
    }

    #[test]
    fn test_diet_cycles_only_on_diet_field() {
        let mut app = app_with(0);
        assert_eq!(app.form.diet, "Herbavor");

        app.cycle_diet(true);
        assert_eq!(app.form.diet, "Herbavor");

        app.focus = Field::Diet;
        app.cycle_diet(true);
        assert_eq!(app.form.diet, "Omnivor");
        app.cycle_diet(false);
        app.cycle_diet(false);
        assert_eq!(app.form.diet, "Carnivor");
    }

    #[test]
    fn test_submit_once_and_person_slot() {
        let mut app = app_with(6);
        app.form.name = "Ada".to_string();
        let mut rng = StdRng::seed_from_u64(2);

        app.submit(&mut rng).unwrap();
        assert_eq!(app.current_page, Page::Results);
        assert_eq!(app.cards.len(), 7);
        assert_eq!(app.person_index(), Some(4));
        assert_eq!(app.cards[4].heading, "Ada");
        assert_eq!(app.cards[4].fact, None);

        assert_eq!(app.submit(&mut rng), Err(PageError::AlreadySubmitted));
    }

    #[test]
    fn test_empty_catalog_shows_only_person() {
        let mut app = app_with(0);
        app.form.name = "Ada".to_string();

        app.submit(&mut StdRng::seed_from_u64(2)).unwrap();

        assert_eq!(app.cards.len(), 1);
        assert_eq!(app.person_index(), Some(0));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Brachiosaurus", 20), "Brachiosaurus");
        assert_eq!(truncate("Brachiosaurus", 8), "Brach...");
        assert_eq!(truncate("Brachiosaurus", 2), "Br");
    }
}
