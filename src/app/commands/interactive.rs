//! Interactive session - the menu-driven selection flow.

use std::collections::BTreeSet;

use dialoguer::{Input, MultiSelect, Select};

use crate::domain::{
    AppError, OperatingSystem, SelectionState, ToolCatalog, render_selection, visible_categories,
};
use crate::ports::ClipboardWriter;

use super::generate::write_script;

const DEFAULT_SCRIPT_NAME: &str = "install_script.sh";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuChoice {
    PickTools,
    Search,
    SwitchOs,
    SwitchManager,
    ShowScript,
    Copy,
    Save,
    Quit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 8] = [
        MenuChoice::PickTools,
        MenuChoice::Search,
        MenuChoice::SwitchOs,
        MenuChoice::SwitchManager,
        MenuChoice::ShowScript,
        MenuChoice::Copy,
        MenuChoice::Save,
        MenuChoice::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuChoice::PickTools => "Pick tools",
            MenuChoice::Search => "Search tools",
            MenuChoice::SwitchOs => "Switch operating system",
            MenuChoice::SwitchManager => "Switch package manager",
            MenuChoice::ShowScript => "Show script",
            MenuChoice::Copy => "Copy script to clipboard",
            MenuChoice::Save => "Save script",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Run the interactive session over an already-loaded catalog.
///
/// The session owns the only mutable `SelectionState`; every menu action runs
/// to completion before the next one is read.
pub fn run_session(
    catalog: &ToolCatalog,
    clipboard: &mut dyn ClipboardWriter,
) -> Result<(), AppError> {
    let mut state = SelectionState::default();
    println!(
        "Loaded {} tool(s) in {} categories",
        catalog.tool_count(),
        catalog.category_count()
    );

    loop {
        let items: Vec<&str> = MenuChoice::ALL.iter().map(|choice| choice.label()).collect();
        let prompt = format!(
            "{} / {} ({} selected)",
            state.operating_system(),
            state.package_manager(),
            state.selected_tools().len()
        );
        let selection = Select::new()
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        match MenuChoice::ALL[selection] {
            MenuChoice::PickTools => pick_tools(catalog, &mut state)?,
            MenuChoice::Search => {
                let query: String = Input::new()
                    .with_prompt("Search (empty shows everything)")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(prompt_error)?;
                state.set_search_query(query);
            }
            MenuChoice::SwitchOs => switch_os(&mut state)?,
            MenuChoice::SwitchManager => switch_manager(&mut state)?,
            MenuChoice::ShowScript => show_script(catalog, &state),
            MenuChoice::Copy => {
                let script = render_selection(catalog, &state);
                match clipboard.write_text(&script) {
                    Ok(()) => println!("✅ Script copied to clipboard"),
                    Err(e) => println!("⚠️  {}", e),
                }
            }
            MenuChoice::Save => save_script(catalog, &state)?,
            MenuChoice::Quit => break,
        }
    }
    Ok(())
}

/// Offer the visible tools as a grouped multi-select and toggle every tool
/// whose membership changed. Unavailable tools stay selectable; they simply
/// render nothing.
fn pick_tools(catalog: &ToolCatalog, state: &mut SelectionState) -> Result<(), AppError> {
    let visible = visible_categories(catalog, state.search_query());
    if visible.is_empty() {
        println!("No tools match '{}'", state.search_query());
        return Ok(());
    }

    let manager = state.package_manager();
    let mut names = Vec::new();
    let mut items = Vec::new();
    let mut defaults = Vec::new();
    for (category, tools) in &visible {
        for tool in tools {
            let marker = if tool.is_available_for(manager) { "" } else { "  (unavailable)" };
            items.push(format!("{} / {}{}", category.category, tool.name, marker));
            defaults.push(state.is_selected(&tool.name));
            names.push(tool.name.as_str());
        }
    }

    let picked = MultiSelect::new()
        .with_prompt("Toggle tools (space to toggle, enter to confirm)")
        .items(&items)
        .defaults(&defaults)
        .interact()
        .map_err(prompt_error)?;

    let picked: BTreeSet<usize> = picked.into_iter().collect();
    for (index, name) in names.iter().enumerate() {
        if picked.contains(&index) != state.is_selected(name) {
            state.toggle_tool(name);
        }
    }
    Ok(())
}

fn switch_os(state: &mut SelectionState) -> Result<(), AppError> {
    let items: Vec<&str> = OperatingSystem::ALL.iter().map(|os| os.as_str()).collect();
    let current = OperatingSystem::ALL
        .iter()
        .position(|os| *os == state.operating_system())
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Operating system")
        .items(&items)
        .default(current)
        .interact()
        .map_err(prompt_error)?;

    let os = OperatingSystem::ALL[selection];
    if os != state.operating_system() && !state.selected_tools().is_empty() {
        println!("⚠️  Selection cleared");
    }
    state.set_operating_system(os);
    Ok(())
}

fn switch_manager(state: &mut SelectionState) -> Result<(), AppError> {
    let managers = state.operating_system().package_managers();
    let items: Vec<&str> = managers.iter().map(|manager| manager.as_str()).collect();
    let current =
        managers.iter().position(|manager| *manager == state.package_manager()).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Package manager")
        .items(&items)
        .default(current)
        .interact()
        .map_err(prompt_error)?;

    let manager = managers[selection];
    if manager != state.package_manager() && !state.selected_tools().is_empty() {
        println!("⚠️  Selection cleared");
    }
    state.set_package_manager(manager)?;
    Ok(())
}

fn show_script(catalog: &ToolCatalog, state: &SelectionState) {
    let script = render_selection(catalog, state);
    if script.is_empty() {
        println!("(no install commands for the current selection)");
    } else {
        println!("{}", script);
    }
}

fn save_script(catalog: &ToolCatalog, state: &SelectionState) -> Result<(), AppError> {
    let name: String = Input::new()
        .with_prompt("File name")
        .default(DEFAULT_SCRIPT_NAME.to_string())
        .interact_text()
        .map_err(prompt_error)?;

    let script = render_selection(catalog, state);
    write_script(name.as_ref(), &script)?;
    println!("✅ Saved {}", name);
    Ok(())
}

fn prompt_error(e: dialoguer::Error) -> AppError {
    AppError::Prompt(e.to_string())
}
