//! Interactive Preview - drive a component definition in the terminal.
//!
//! This demo demonstrates the whole pipeline working together:
//! - Importing a definition into a registry
//! - Rendering the template to a visual-node tree
//! - Dispatching gesture events into the behavior machine
//! - Navigation and haptic requests surfacing through host handlers
//!
//! Keys: Left/Right swipe the card deck, Tab selects a tap target,
//! Enter activates it, q quits.
//!
//! Run with: cargo run --example preview

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Stylize;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};

use protoview::{
    ComponentInstance, ComponentRegistry, EventPayload, EventType, HostHandlers, PropMap,
    RenderMode, StackCard, VisualKind, VisualNode,
};

const SAMPLE: &str = r#"{
    "name": "contact-deck",
    "displayName": "Contact Deck",
    "icon": "C",
    "defaultProps": {
        "title": "Team",
        "cta": "Open profile",
        "detailScreen": "contact-detail",
        "contacts": [
            { "name": "Anna", "role": "Designer" },
            { "name": "Boris", "role": "Engineer" },
            { "name": "Clara", "role": "Researcher" },
            { "name": "Dmitri", "role": "Producer" }
        ]
    },
    "settings": [
        { "key": "title", "label": "Title", "type": "text" }
    ],
    "template": {
        "type": "container",
        "children": [
            { "type": "heading", "prop": "title" },
            { "type": "spacer", "height": 8 },
            {
                "type": "stack",
                "dataKey": "contacts",
                "indexKey": "cursor",
                "itemTemplate": {
                    "type": "container",
                    "children": [
                        { "type": "heading", "prop": "item.name" },
                        { "type": "text", "prop": "item.role" }
                    ]
                }
            },
            { "type": "spacer" },
            { "type": "button", "prop": "cta", "action": "navigate", "target": "prop:detailScreen" }
        ]
    },
    "behavior": {
        "type": "state-machine",
        "initial": "browsing",
        "context": { "cursor": 0 },
        "states": {
            "browsing": {
                "on": {
                    "SWIPE_LEFT": {
                        "target": "browsing",
                        "actions": [
                            { "type": "nextItem", "key": "cursor", "listKey": "contacts" },
                            { "type": "haptic", "hapticType": "light" }
                        ]
                    },
                    "SWIPE_RIGHT": {
                        "target": "browsing",
                        "actions": [
                            { "type": "prevItem", "key": "cursor" },
                            { "type": "haptic", "hapticType": "light" }
                        ]
                    }
                }
            }
        }
    }
}"#;

fn main() -> io::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let mut registry = ComponentRegistry::new();
    registry.import_str(SAMPLE).expect("sample definition is valid");
    let mut instance = ComponentInstance::new(registry.get("contact-deck").unwrap());

    // Host handlers surface outward requests on the status line.
    let status = Rc::new(RefCell::new(String::from("ready")));
    let nav_status = status.clone();
    let buzz_status = status.clone();
    let host = HostHandlers {
        on_navigate: Some(Rc::new(move |screen| {
            *nav_status.borrow_mut() = format!("navigate -> {screen}");
        })),
        on_vibrate: Some(Rc::new(move |pattern| {
            *buzz_status.borrow_mut() = format!("vibrate {pattern:?}");
        })),
    };

    let overrides = PropMap::new();
    let mut selected_tap = 0usize;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = run(
        &mut stdout,
        &mut instance,
        &overrides,
        &host,
        &status,
        &mut selected_tap,
    );

    execute!(stdout, LeaveAlternateScreen, cursor::Show)?;
    disable_raw_mode()?;
    result
}

fn run(
    stdout: &mut io::Stdout,
    instance: &mut ComponentInstance,
    overrides: &PropMap,
    host: &HostHandlers,
    status: &Rc<RefCell<String>>,
    selected_tap: &mut usize,
) -> io::Result<()> {
    loop {
        let node = instance.render(overrides, RenderMode::Preview);
        let tap_count = node.as_ref().map_or(0, |n| n.taps().len());
        if tap_count > 0 {
            *selected_tap = (*selected_tap).min(tap_count - 1);
        }
        draw(stdout, instance, node.as_ref(), *selected_tap, &status.borrow())?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Left => {
                    instance.dispatch(
                        EventType::SwipeRight,
                        EventPayload::default(),
                        overrides,
                        host,
                    );
                }
                KeyCode::Right => {
                    instance.dispatch(
                        EventType::SwipeLeft,
                        EventPayload::default(),
                        overrides,
                        host,
                    );
                }
                KeyCode::Tab => {
                    if tap_count > 0 {
                        *selected_tap = (*selected_tap + 1) % tap_count;
                    }
                }
                KeyCode::Enter => {
                    let tap = node
                        .as_ref()
                        .and_then(|n| n.taps().get(*selected_tap).copied().cloned());
                    if let Some(tap) = tap {
                        instance.activate(&tap, overrides, host);
                    }
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn draw(
    stdout: &mut io::Stdout,
    instance: &ComponentInstance,
    node: Option<&VisualNode>,
    selected_tap: usize,
    status: &str,
) -> io::Result<()> {
    queue!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let header = format!(
        "contact-deck  state={}  context={}",
        instance.state(),
        serde_json::Value::Object(instance.context().clone())
    );
    write_line(stdout, &header.bold().to_string())?;
    write_line(stdout, "")?;

    let mut tap_counter = 0usize;
    if let Some(node) = node {
        draw_node(stdout, node, 1, selected_tap, &mut tap_counter)?;
    } else {
        write_line(stdout, "(component renders nothing)")?;
    }

    write_line(stdout, "")?;
    write_line(stdout, &format!("status: {status}").dim().to_string())?;
    write_line(
        stdout,
        &"←/→ swipe deck · Tab select · Enter tap · q quit".dim().to_string(),
    )?;
    stdout.flush()
}

fn draw_node(
    stdout: &mut io::Stdout,
    node: &VisualNode,
    depth: usize,
    selected_tap: usize,
    tap_counter: &mut usize,
) -> io::Result<()> {
    let indent = "  ".repeat(depth);
    let marker = node.tap.as_ref().map(|_| {
        let selected = *tap_counter == selected_tap;
        *tap_counter += 1;
        selected
    });

    match &node.kind {
        VisualKind::Container { children, .. } => {
            for child in children {
                draw_node(stdout, child, depth, selected_tap, tap_counter)?;
            }
        }
        VisualKind::Heading { text } => {
            write_line(stdout, &format!("{indent}{}", text.clone().bold()))?;
        }
        VisualKind::Text { text } => {
            write_line(stdout, &format!("{indent}{text}"))?;
        }
        VisualKind::Image { source } => {
            let label = match source {
                Some(source) => format!("[image: {source}]"),
                None => "[no image]".to_string(),
            };
            write_line(stdout, &format!("{indent}{}", label.dim()))?;
        }
        VisualKind::Button { label, .. } => {
            let button = format!("[ {label} ]");
            let styled = if marker == Some(true) {
                button.reverse().to_string()
            } else {
                button
            };
            write_line(stdout, &format!("{indent}{styled}"))?;
        }
        VisualKind::Input { placeholder, read_only } => {
            let suffix = if *read_only { " (read-only)" } else { "" };
            write_line(stdout, &format!("{indent}⟨{placeholder}⟩{suffix}"))?;
        }
        VisualKind::Spacer { .. } => {
            write_line(stdout, "")?;
        }
        VisualKind::Stack { cards } => {
            for StackCard { index, node, z, .. } in cards {
                write_line(
                    stdout,
                    &format!("{indent}{}", format!("┌─ card {index} (z={z})").dim()),
                )?;
                draw_node(stdout, node, depth + 1, selected_tap, tap_counter)?;
            }
        }
    }
    Ok(())
}

fn write_line(stdout: &mut io::Stdout, text: &str) -> io::Result<()> {
    queue!(stdout, crossterm::style::Print(text), cursor::MoveToNextLine(1))
}
