use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};

use standup_core::InputState;
use standup_domain::{query, EntryField};

use crate::app::{App, AppMode, SprintsFocus, Tab};
use crate::forms::{MemberField, SprintField};
use crate::popup::{popup_block, render_input_popup};
use crate::theme;

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_tabs(app, frame, chunks[0]);

    match app.tab {
        Tab::Dashboard => render_dashboard(app, frame, chunks[1]),
        Tab::Standup => render_standup(app, frame, chunks[1]),
        Tab::Sprints => render_sprints(app, frame, chunks[1]),
        Tab::Reports => render_reports(app, frame, chunks[1]),
    }

    render_footer(app, frame, chunks[2]);

    match app.mode {
        AppMode::Normal => {}
        AppMode::SprintForm => render_sprint_form_popup(app, frame),
        AppMode::MemberForm => render_member_form_popup(app, frame),
        AppMode::EditAnswer => render_answer_popup(app, frame),
        AppMode::EditDate => render_date_popup(app, frame),
    }
}

fn render_tabs(app: &App, frame: &mut Frame, area: Rect) {
    let titles = Tab::ALL.iter().map(|t| t.title());
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .highlight_style(theme::bold_highlight())
        .block(
            Block::default()
                .title("Daily Standup Tracker")
                .borders(Borders::ALL),
        );
    frame.render_widget(tabs, area);
}

fn render_dashboard(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[0]);

    let sprint_lines = match app.active_sprint_ref() {
        Some(sprint) => vec![
            Line::from(Span::styled(
                sprint.name.clone(),
                theme::stat_value(theme::STAT_SPRINT),
            )),
            Line::from(Span::styled(sprint.date_range(), theme::label_text())),
        ],
        None => vec![Line::from(Span::styled(
            "No active sprint",
            theme::label_text(),
        ))],
    };
    frame.render_widget(
        Paragraph::new(sprint_lines)
            .block(Block::default().title("Active Sprint").borders(Borders::ALL)),
        stats[0],
    );

    let member_count = query::active_member_count(app.store.members()).to_string();
    frame.render_widget(
        Paragraph::new(Span::styled(
            member_count,
            theme::stat_value(theme::STAT_MEMBERS),
        ))
        .block(Block::default().title("Team Members").borders(Borders::ALL)),
        stats[1],
    );

    let entry_count =
        query::todays_entries(app.store.entries(), app.selected_date, app.active_sprint)
            .len()
            .to_string();
    frame.render_widget(
        Paragraph::new(Span::styled(
            entry_count,
            theme::stat_value(theme::STAT_ENTRIES),
        ))
        .block(
            Block::default()
                .title("Today's Entries")
                .borders(Borders::ALL),
        ),
        stats[2],
    );

    let recent = query::recent_activity(app.store.entries(), app.recent_limit);
    let items: Vec<ListItem> = if recent.is_empty() {
        vec![ListItem::new(Span::styled(
            "No standup activity yet.",
            theme::label_text(),
        ))]
    } else {
        recent
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        query::member_name(app.store.members(), entry.member_id).to_string(),
                        theme::normal_text().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" updated standup for {}", entry.date),
                        theme::label_text(),
                    ),
                ]))
            })
            .collect()
    };
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .title("Recent Activity")
                .borders(Borders::ALL),
        ),
        chunks[1],
    );
}

fn render_standup(app: &App, frame: &mut Frame, area: Rect) {
    let Some(sprint) = app.active_sprint_ref() else {
        let warning = Paragraph::new(
            "No active sprint selected. Create or activate a sprint on the Sprints tab.",
        )
        .style(theme::highlight_text())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(warning, area);
        return;
    };

    let members = query::sprint_members(app.store.members(), Some(sprint));

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(members.iter().map(|_| Constraint::Length(7)));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let header = Line::from(vec![
        Span::styled(format!("{} | ", sprint.name), theme::normal_text()),
        Span::styled(format!("Date: {}", app.selected_date), theme::highlight_text()),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    for (row, member) in members.iter().enumerate() {
        let selected = app.standup_selection.is_selected(row);
        let block = Block::default()
            .title(format!("{} - {}", member.name, member.role))
            .borders(Borders::ALL)
            .border_style(if selected {
                theme::focused_border()
            } else {
                theme::unfocused_border()
            });
        let inner = block.inner(chunks[row + 1]);
        frame.render_widget(block, chunks[row + 1]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(inner);

        for (col, field) in EntryField::ALL.iter().enumerate() {
            let focused = selected && app.field_cursor == col;
            let value = query::entry_value(
                app.store.entries(),
                app.selected_date,
                sprint.id,
                member.id,
                *field,
            );
            let lines = vec![
                Line::from(Span::styled(
                    field.prompt(),
                    if focused {
                        theme::bold_highlight()
                    } else {
                        theme::label_text()
                    },
                )),
                Line::from(Span::styled(value.to_string(), theme::normal_text())),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), columns[col]);
        }
    }
}

fn render_sprints(app: &App, frame: &mut Frame, area: Rect) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let sprint_items: Vec<ListItem> = if app.store.sprints().is_empty() {
        vec![ListItem::new(Span::styled(
            "No sprints yet. Press 'n' to create one.",
            theme::label_text(),
        ))]
    } else {
        app.store
            .sprints()
            .iter()
            .enumerate()
            .map(|(idx, sprint)| {
                let is_session = app.active_sprint == Some(sprint.id);
                let mut name_spans = vec![Span::styled(
                    sprint.name.clone(),
                    theme::normal_text()
                        .add_modifier(Modifier::BOLD)
                        .patch(theme::selected_item(app.sprint_selection.is_selected(idx))),
                )];
                if is_session {
                    name_spans.push(Span::styled(" (session)", theme::highlight_text()));
                }
                ListItem::new(vec![
                    Line::from(name_spans),
                    Line::from(Span::styled(sprint.date_range(), theme::label_text())),
                    Line::from(Span::styled(
                        sprint.status.label(),
                        theme::sprint_status_style(sprint.status),
                    )),
                ])
            })
            .collect()
    };
    frame.render_widget(
        List::new(sprint_items).block(
            Block::default()
                .title("Sprints")
                .borders(Borders::ALL)
                .border_style(panel_border(app, SprintsFocus::Sprints)),
        ),
        panels[0],
    );

    let member_items: Vec<ListItem> = if app.store.members().is_empty() {
        vec![ListItem::new(Span::styled(
            "No team members yet. Press 'n' to add one.",
            theme::label_text(),
        ))]
    } else {
        app.store
            .members()
            .iter()
            .enumerate()
            .map(|(idx, member)| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        member.name.clone(),
                        theme::normal_text()
                            .add_modifier(Modifier::BOLD)
                            .patch(theme::selected_item(app.member_selection.is_selected(idx))),
                    )),
                    Line::from(Span::styled(member.role.clone(), theme::label_text())),
                    Line::from(Span::styled(
                        if member.active { "Active" } else { "Inactive" },
                        theme::member_active_style(member.active),
                    )),
                ])
            })
            .collect()
    };
    frame.render_widget(
        List::new(member_items).block(
            Block::default()
                .title("Team Members")
                .borders(Borders::ALL)
                .border_style(panel_border(app, SprintsFocus::Members)),
        ),
        panels[1],
    );
}

fn panel_border(app: &App, panel: SprintsFocus) -> ratatui::style::Style {
    if app.sprints_focus == panel {
        theme::focused_border()
    } else {
        theme::unfocused_border()
    }
}

fn render_reports(app: &App, frame: &mut Frame, area: Rect) {
    let entries = app.store.entries();
    let history = query::recent_activity(entries, entries.len());

    let header = Row::new(["Date", "Member", "Yesterday", "Today", "Blockers"])
        .style(theme::bold_highlight());

    let rows: Vec<Row> = history
        .iter()
        .skip(app.report_scroll)
        .map(|entry| {
            Row::new([
                entry.date.to_string(),
                query::member_name(app.store.members(), entry.member_id).to_string(),
                entry.yesterday.clone(),
                entry.today.clone(),
                entry.blockers.clone(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(18),
            Constraint::Percentage(24),
            Constraint::Percentage(24),
            Constraint::Percentage(24),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title("Standup History")
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        AppMode::Normal => match app.tab {
            Tab::Dashboard => "Tab/1-4 switch view | q quit",
            Tab::Standup => "j/k member | h/l answer | Enter edit | d date | q quit",
            Tab::Sprints => "h/l panel | j/k select | n new | e edit | Enter activate | q quit",
            Tab::Reports => "j/k scroll | q quit",
        },
        AppMode::SprintForm => {
            "Tab next field | j/k + Space pick members | Enter save | Esc cancel"
        }
        AppMode::MemberForm => "Tab next field | Enter save | Esc cancel",
        AppMode::EditAnswer | AppMode::EditDate => "Enter save | Esc cancel",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, theme::label_text()))
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &InputState,
    focused: bool,
) {
    let field = Paragraph::new(input.as_str())
        .style(theme::normal_text())
        .block(Block::default().title(title).borders(Borders::ALL).border_style(
            if focused {
                theme::focused_border()
            } else {
                theme::unfocused_border()
            },
        ));
    frame.render_widget(field, area);

    if focused {
        frame.set_cursor_position((area.x + input.cursor() as u16 + 1, area.y + 1));
    }
}

fn render_sprint_form_popup(app: &App, frame: &mut Frame) {
    let Some(form) = app.sprint_form.as_ref() else {
        return;
    };

    let title = if form.editing.is_some() {
        "Edit Sprint"
    } else {
        "New Sprint"
    };
    let inner = popup_block(frame, title, 60, 70);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_field(
        frame,
        chunks[0],
        "Sprint Name",
        &form.name,
        form.focus == SprintField::Name,
    );
    render_text_field(
        frame,
        chunks[1],
        "Start Date (YYYY-MM-DD)",
        &form.start_date,
        form.focus == SprintField::StartDate,
    );
    render_text_field(
        frame,
        chunks[2],
        "End Date (YYYY-MM-DD)",
        &form.end_date,
        form.focus == SprintField::EndDate,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Team Members",
            if form.focus == SprintField::Members {
                theme::bold_highlight()
            } else {
                theme::label_text()
            },
        )),
        chunks[3],
    );

    let items: Vec<ListItem> = app
        .store
        .members()
        .iter()
        .filter(|m| m.active)
        .enumerate()
        .map(|(idx, member)| {
            let mark = if form.has_member(member.id) { "[x]" } else { "[ ]" };
            let cursor_here =
                form.focus == SprintField::Members && form.member_cursor.is_selected(idx);
            ListItem::new(Line::from(Span::styled(
                format!("{} {} - {}", mark, member.name, member.role),
                theme::normal_text().patch(theme::selected_item(cursor_here)),
            )))
        })
        .collect();
    frame.render_widget(List::new(items), chunks[4]);
}

fn render_member_form_popup(app: &App, frame: &mut Frame) {
    let Some(form) = app.member_form.as_ref() else {
        return;
    };

    let title = if form.editing.is_some() {
        "Edit Member"
    } else {
        "New Team Member"
    };
    let inner = popup_block(frame, title, 50, 40);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_field(
        frame,
        chunks[0],
        "Full Name",
        &form.name,
        form.focus == MemberField::Name,
    );
    render_text_field(
        frame,
        chunks[1],
        "Role (e.g. Frontend Developer)",
        &form.role,
        form.focus == MemberField::Role,
    );
}

fn render_answer_popup(app: &App, frame: &mut Frame) {
    let Some(editor) = app.answer_editor.as_ref() else {
        return;
    };

    let member = query::member_name(app.store.members(), editor.member_id);
    render_input_popup(
        frame,
        &format!("Standup - {}", member),
        editor.field.prompt(),
        editor.input.as_str(),
        editor.input.cursor(),
    );
}

fn render_date_popup(app: &App, frame: &mut Frame) {
    let Some(input) = app.date_input.as_ref() else {
        return;
    };

    render_input_popup(
        frame,
        "Select Date",
        "Date (YYYY-MM-DD)",
        input.as_str(),
        input.cursor(),
    );
}
