//! Section renderers: map [`ResolvedContent`] onto ratatui widgets.
//!
//! Rendering is purely a projection of resolved content; every fallback
//! decision already happened in `folio-content::resolve`.

use ratatui::{prelude::*, widgets::*};

use folio_content::contact::Notice;
use folio_content::resolve::ResolvedContent;

use crate::app::{App, ContactField, Section};
use crate::theme;

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header: brand + section tabs
            Constraint::Min(1),    // active section body
            Constraint::Length(1), // status / notice line
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    match app.section {
        Section::Contact => draw_contact(f, app, chunks[1]),
        section => draw_section_body(f, app, section, chunks[1]),
    }
    draw_status(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(app.content.brand.name.clone(), theme::title_style()),
        Span::styled(format!("  {}", app.content.brand.subtitle), theme::text_muted()),
        Span::raw("    "),
    ];
    for section in Section::ALL {
        let style = if section == app.section {
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
        } else {
            theme::text_muted()
        };
        spans.push(Span::styled(format!(" {} ", section.title()), style));
    }

    let block = Block::default().borders(Borders::ALL).border_style(theme::border_style(false));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_section_body(f: &mut Frame, app: &App, section: Section, area: Rect) {
    let content = &app.content;
    let lines = match section {
        Section::Hero => hero_lines(content),
        Section::About => about_lines(content),
        Section::Skills => skills_lines(content),
        Section::Projects => projects_lines(content),
        Section::Testimonials => testimonials_lines(content),
        Section::Contact => unreachable!("contact has its own renderer"),
    };

    let block = Block::default()
        .title(Line::from(Span::styled(section.title(), theme::title_style())))
        .borders(Borders::ALL)
        .border_style(theme::border_style(true));
    let paragraph = Paragraph::new(lines)
        .style(theme::text_style())
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(block);
    f.render_widget(paragraph, area);
}

fn hero_lines(content: &ResolvedContent) -> Vec<Line<'static>> {
    let hero = &content.hero;
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(hero.heading.clone(), theme::title_style())),
    ];
    if let Some(highlight) = &hero.highlight {
        lines.push(Line::from(Span::styled(highlight.clone(), theme::highlight_style())));
    }
    lines.push(Line::from(Span::styled(hero.subheading.clone(), theme::text_style())));
    lines.push(Line::from(Span::styled(hero.description.clone(), theme::text_muted())));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(format!("[ {} ]", hero.primary_cta.label), Style::default().fg(theme::ACCENT)),
        Span::raw("  "),
        Span::styled(format!("[ {} ]", hero.secondary_cta.label), Style::default().fg(theme::GOLD)),
    ]));

    if !content.quick_links.is_empty() {
        lines.push(Line::default());
        for link in &content.quick_links {
            lines.push(Line::from(vec![
                Span::styled(format!("{} {}", link.icon.glyph(), link.label), theme::text_style()),
                Span::styled(format!("  {}", link.href), theme::text_muted()),
            ]));
        }
    }

    if content.resumes.professional.is_some() || content.resumes.ats.is_some() {
        lines.push(Line::default());
        if let Some(file) = &content.resumes.professional {
            lines.push(Line::from(Span::styled(format!("Resume: {file}"), theme::text_muted())));
        }
        if let Some(file) = &content.resumes.ats {
            lines.push(Line::from(Span::styled(format!("ATS Resume: {file}"), theme::text_muted())));
        }
    }
    lines
}

fn about_lines(content: &ResolvedContent) -> Vec<Line<'static>> {
    let about = &content.about;
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(about.heading.clone(), theme::title_style())),
    ];
    if !about.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(about.subtitle.clone(), theme::highlight_style())));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(about.description.clone(), theme::text_style())));
    if !about.quote.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(format!("❝ {}", about.quote), theme::highlight_style())));
    }
    if !about.caption.is_empty() {
        for caption_line in about.caption.lines() {
            lines.push(Line::from(Span::styled(caption_line.to_string(), theme::text_muted())));
        }
    }
    if !about.highlights.is_empty() {
        lines.push(Line::default());
        for card in &about.highlights {
            lines.push(Line::from(vec![
                Span::styled(format!("{} {}", card.icon.glyph(), card.title), theme::text_style()),
                Span::styled(format!(" — {}", card.description), theme::text_muted()),
            ]));
        }
    }
    lines
}

fn skills_lines(content: &ResolvedContent) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    for group in &content.skills {
        lines.push(Line::from(Span::styled(group.title.clone(), theme::title_style())));
        if !group.subtitle.is_empty() {
            lines.push(Line::from(Span::styled(group.subtitle.clone(), theme::text_muted())));
        }
        if !group.highlight.is_empty() {
            lines.push(Line::from(Span::styled(group.highlight.clone(), theme::highlight_style())));
        }
        if !group.skills.is_empty() {
            let names: Vec<String> = group.skills.iter().map(|skill| skill.name.clone()).collect();
            lines.push(Line::from(Span::styled(names.join(" · "), theme::text_style())));
        }
        lines.push(Line::default());
    }
    lines
}

fn projects_lines(content: &ResolvedContent) -> Vec<Line<'static>> {
    if content.projects.is_empty() {
        return vec![
            Line::default(),
            Line::from(Span::styled("No projects published yet.", theme::text_muted())),
        ];
    }

    let mut lines = vec![Line::default()];
    for project in &content.projects {
        lines.push(Line::from(Span::styled(project.title.clone(), theme::title_style())));
        if !project.subtitle.is_empty() {
            lines.push(Line::from(Span::styled(project.subtitle.clone(), theme::highlight_style())));
        }
        if !project.description.is_empty() {
            lines.push(Line::from(Span::styled(project.description.clone(), theme::text_style())));
        }
        if !project.tech.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("tech: {}", project.tech.join(", ")),
                theme::text_muted(),
            )));
        }
        let mut link_spans = Vec::new();
        if !project.live_url.is_empty() {
            link_spans.push(Span::styled(format!("live: {}  ", project.live_url), theme::text_muted()));
        }
        if !project.code_url.is_empty() {
            link_spans.push(Span::styled(format!("code: {}", project.code_url), theme::text_muted()));
        }
        if !link_spans.is_empty() {
            lines.push(Line::from(link_spans));
        }
        lines.push(Line::default());
    }
    lines
}

fn testimonials_lines(content: &ResolvedContent) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    for entry in &content.testimonials {
        lines.push(Line::from(Span::styled(format!("❝ {}", entry.quote), theme::text_style())));
        lines.push(Line::from(Span::styled(
            format!("   — {}, {}", entry.author_name, entry.author_role),
            theme::text_muted(),
        )));
        lines.push(Line::default());
    }

    if !content.social_links.is_empty() {
        lines.push(Line::from(Span::styled("Elsewhere", theme::title_style())));
        for link in &content.social_links {
            lines.push(Line::from(vec![
                Span::styled(format!("{} {}", link.icon.glyph(), link.label), theme::text_style()),
                Span::styled(format!("  {}", link.display), theme::text_muted()),
            ]));
        }
    }
    lines
}

fn draw_contact(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name
            Constraint::Length(3), // email
            Constraint::Length(3), // project
            Constraint::Length(3), // message
            Constraint::Min(1),    // hint
        ])
        .split(area);

    for (field, chunk) in ContactField::ALL.into_iter().zip(chunks.iter()) {
        draw_field(f, app, field, *chunk);
    }

    let hint = if app.form.is_submitting() {
        "Sending…"
    } else {
        "Enter send  ↑/↓ field  Tab section  Esc quit"
    };
    f.render_widget(Paragraph::new(hint).style(theme::text_muted()), chunks[4]);
}

fn draw_field(f: &mut Frame, app: &App, field: ContactField, area: Rect) {
    let focused = app.focused_field == field;
    let block = Block::default()
        .title(Span::styled(field.label(), theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused));
    let inner = block.inner(area);
    let value = app.field(field);
    f.render_widget(Paragraph::new(value.to_string()).style(theme::text_style()).block(block), area);

    if focused && !app.form.is_submitting() {
        let x = inner.x.saturating_add(value.chars().count() as u16);
        f.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(notice) = app.notice() {
        match notice {
            Notice::Success(text) => Line::from(Span::styled(text.clone(), Style::default().fg(theme::OK))),
            Notice::Error(text) => Line::from(Span::styled(text.clone(), Style::default().fg(theme::WARN))),
        }
    } else if app.loading {
        Line::from(Span::styled("Loading content…", theme::text_muted()))
    } else if app.offline {
        // A failed refresh leaves previously fetched content on screen.
        let text = if app.has_remote {
            "Refresh failed (backend unreachable)"
        } else {
            "Showing fallback copy (backend unreachable)"
        };
        Line::from(Span::styled(text, theme::text_muted()))
    } else {
        let footer = &app.content.footer;
        let mut text = footer.text.clone();
        if !footer.tagline.is_empty() {
            text.push_str("  ·  ");
            text.push_str(&footer.tagline);
        }
        Line::from(Span::styled(text, theme::text_muted()))
    };
    f.render_widget(Paragraph::new(line), area);
}
