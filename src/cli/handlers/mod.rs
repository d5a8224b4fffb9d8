use tracing::debug;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::store::MatchStore;
use crate::model::fixture::Match;
use crate::model::form::{FormField, MatchForm};
use crate::ops::fixture_ops::{self, CheckResult};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a subcommand against `store`
pub fn dispatch(command: Commands, store: &MatchStore, json: bool) -> CmdResult {
    debug!(path = %store.path().display(), "cli command");
    match command {
        Commands::List => cmd_list(store, json),
        Commands::Add(args) => cmd_add(store, args, json),
        Commands::Edit(args) => cmd_edit(store, args, json),
        Commands::Delete(args) => cmd_delete(store, args, json),
        Commands::Clear(args) => cmd_clear(store, args, json),
        Commands::Check => cmd_check(store, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Turn a 1-based list number into an index into `matches`
fn index_for(number: usize, matches: &[Match]) -> Result<usize, String> {
    if number == 0 || number > matches.len() {
        return Err(match matches.len() {
            0 => format!("no match #{}: the list is empty", number),
            1 => format!("no match #{}: there is 1 match", number),
            n => format!("no match #{}: there are {} matches", number, n),
        });
    }
    Ok(number - 1)
}

fn print_saved(verb: &str, number: usize, m: &Match, json: bool) -> CmdResult {
    if json {
        let out = NumberedMatchJson { number, record: m };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} match #{}", verb, number);
        for line in format_match_detail(number, m) {
            println!("{}", line);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(store: &MatchStore, json: bool) -> CmdResult {
    let matches = store.load();

    if json {
        println!("{}", serde_json::to_string_pretty(&numbered(&matches))?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No matches.");
        return Ok(());
    }
    for (i, m) in matches.iter().enumerate() {
        println!("{}", format_match_line(i + 1, m));
    }
    Ok(())
}

fn cmd_check(store: &MatchStore, json: bool) -> CmdResult {
    // Strict read: a file `load` would discard is the worst problem there is
    let (matches, result) = match store.try_load() {
        Ok(matches) => {
            let matches = matches.unwrap_or_default();
            let result = fixture_ops::check_matches(&matches);
            (matches, result)
        }
        Err(e) => (Vec::new(), CheckResult::unreadable(e)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for problem in &result.problems {
            println!("  {}", problem);
        }
        if result.valid {
            let n = matches.len();
            println!(
                "\u{2713} {} is valid ({} match{})",
                store.path().display(),
                n,
                if n == 1 { "" } else { "es" }
            );
        } else {
            println!("\u{2717} {} has problems", store.path().display());
        }
    }

    if result.valid {
        Ok(())
    } else {
        Err(format!("{} problem(s) found", result.problems.len()).into())
    }
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_add(store: &MatchStore, args: AddArgs, json: bool) -> CmdResult {
    let mut form = MatchForm::empty();
    form.set(FormField::HomeTeam, args.home);
    form.set(FormField::AwayTeam, args.away);
    form.set(FormField::StreamSource, args.stream);
    form.set(FormField::FixtureDate, args.date);
    form.set(FormField::FixtureTime, args.time);
    if let Some(logo) = args.home_logo {
        form.set(FormField::HomeLogo, logo);
    }
    if let Some(logo) = args.away_logo {
        form.set(FormField::AwayLogo, logo);
    }
    let m = form.validate()?;

    let mut matches = store.load();
    fixture_ops::add_match(store, &mut matches, m)?;
    let number = matches.len();
    print_saved("Added", number, &matches[number - 1], json)
}

fn cmd_edit(store: &MatchStore, args: EditArgs, json: bool) -> CmdResult {
    let mut matches = store.load();
    let index = index_for(args.number, &matches)?;

    let mut form = MatchForm::from_match(&matches[index]);
    let updates = [
        (FormField::HomeTeam, args.home),
        (FormField::AwayTeam, args.away),
        (FormField::StreamSource, args.stream),
        (FormField::FixtureDate, args.date),
        (FormField::FixtureTime, args.time),
        (FormField::HomeLogo, args.home_logo),
        (FormField::AwayLogo, args.away_logo),
    ];
    // Team names go first so an explicit logo wins over the derived one
    for (field, value) in updates {
        if let Some(value) = value {
            form.set(field, value);
        }
    }
    let m = form.validate()?;

    fixture_ops::replace_match(store, &mut matches, index, m)?;
    print_saved("Updated", args.number, &matches[index], json)
}

fn cmd_delete(store: &MatchStore, args: DeleteArgs, json: bool) -> CmdResult {
    let mut matches = store.load();
    let index = index_for(args.number, &matches)?;

    if !args.yes {
        return Err(format!(
            "refusing to delete \"{}\" without --yes",
            matches[index].title()
        )
        .into());
    }

    let removed = fixture_ops::remove_match(store, &mut matches, index)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&DeletedJson { deleted: 1 })?);
    } else {
        println!("Deleted {}", removed.title());
    }
    Ok(())
}

fn cmd_clear(store: &MatchStore, args: ClearArgs, json: bool) -> CmdResult {
    let mut matches = store.load();

    if matches.is_empty() {
        if json {
            println!("{}", serde_json::to_string_pretty(&DeletedJson { deleted: 0 })?);
        } else {
            println!("There are no matches to delete.");
        }
        return Ok(());
    }
    if !args.yes {
        return Err(format!(
            "refusing to delete all {} matches without --yes",
            matches.len()
        )
        .into());
    }

    let count = fixture_ops::clear_matches(store, &mut matches)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&DeletedJson { deleted: count })?);
    } else {
        println!("Deleted {} match{}", count, if count == 1 { "" } else { "es" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn store_with(tmp: &TempDir, teams: &[(&str, &str)]) -> MatchStore {
        let store = MatchStore::new(tmp.path().join("matches.json"));
        let matches: Vec<Match> = teams
            .iter()
            .map(|(home, away)| {
                let mut form = MatchForm::empty();
                form.set(FormField::HomeTeam, *home);
                form.set(FormField::AwayTeam, *away);
                form.set(FormField::FixtureDate, "01082025");
                form.validate().unwrap()
            })
            .collect();
        store.save(&matches).unwrap();
        store
    }

    #[test]
    fn index_for_is_one_based() {
        let tmp = TempDir::new().unwrap();
        let matches = store_with(&tmp, &[("A", "B"), ("C", "D")]).load();
        assert_eq!(index_for(1, &matches), Ok(0));
        assert_eq!(index_for(2, &matches), Ok(1));
        assert_eq!(
            index_for(0, &matches).unwrap_err(),
            "no match #0: there are 2 matches"
        );
        assert_eq!(
            index_for(3, &[]).unwrap_err(),
            "no match #3: the list is empty"
        );
    }

    #[test]
    fn add_rejects_invalid_date_without_writing() {
        let tmp = TempDir::new().unwrap();
        let store = MatchStore::new(tmp.path().join("matches.json"));
        let args = AddArgs {
            home: "Ajax".into(),
            away: "PSV".into(),
            date: "31042025".into(),
            time: String::new(),
            stream: String::new(),
            home_logo: None,
            away_logo: None,
        };
        let err = cmd_add(&store, args, false).unwrap_err();
        assert!(err.to_string().contains("31042025"));
        assert!(!store.path().exists());
    }

    #[test]
    fn edit_renames_team_and_follows_derived_logo() {
        let tmp = TempDir::new().unwrap();
        let store = store_with(&tmp, &[("Ajax", "PSV")]);
        let args = EditArgs {
            number: 1,
            home: Some("Ajax Amsterdam".into()),
            away: None,
            date: None,
            time: Some("18:45".into()),
            stream: None,
            home_logo: None,
            away_logo: None,
        };
        cmd_edit(&store, args, false).unwrap();

        let m = &store.load()[0];
        assert_eq!(m.home_team, "Ajax Amsterdam");
        assert_eq!(m.home_logo, "/logos/Ajax_Amsterdam.png");
        assert_eq!(m.away_logo, "/logos/PSV.png");
        assert_eq!(m.fixture_time, "18:45");
    }

    #[test]
    fn edit_with_explicit_logo_and_rename() {
        let tmp = TempDir::new().unwrap();
        let store = store_with(&tmp, &[("Ajax", "PSV")]);
        let args = EditArgs {
            number: 1,
            home: Some("AFC Ajax".into()),
            away: None,
            date: None,
            time: None,
            stream: None,
            home_logo: Some("/img/ajax.svg".into()),
            away_logo: None,
        };
        cmd_edit(&store, args, false).unwrap();
        assert_eq!(store.load()[0].home_logo, "/img/ajax.svg");
    }

    #[test]
    fn delete_requires_yes() {
        let tmp = TempDir::new().unwrap();
        let store = store_with(&tmp, &[("A", "B")]);
        let err = cmd_delete(&store, DeleteArgs { number: 1, yes: false }, false).unwrap_err();
        assert!(err.to_string().contains("--yes"));
        assert_eq!(store.load().len(), 1);

        cmd_delete(&store, DeleteArgs { number: 1, yes: true }, false).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn clear_on_empty_does_not_create_file() {
        let tmp = TempDir::new().unwrap();
        let store = MatchStore::new(tmp.path().join("matches.json"));
        cmd_clear(&store, ClearArgs { yes: true }, false).unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn check_fails_on_hand_edited_date() {
        let tmp = TempDir::new().unwrap();
        let store = store_with(&tmp, &[("A", "B")]);
        let mut matches = store.load();
        matches[0].fixture_date = "2025-08-01".into();
        store.save(&matches).unwrap();

        assert!(cmd_check(&store, true).is_err());
    }

    #[test]
    fn check_fails_on_unparseable_file() {
        let tmp = TempDir::new().unwrap();
        let store = MatchStore::new(tmp.path().join("matches.json"));
        std::fs::write(store.path(), "{not json").unwrap();
        let err = cmd_check(&store, false).unwrap_err();
        assert_eq!(err.to_string(), "1 problem(s) found");
        // The content is left for the user to repair
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{not json");
    }

    #[test]
    fn check_passes_when_file_is_missing() {
        let tmp = TempDir::new().unwrap();
        let store = MatchStore::new(tmp.path().join("matches.json"));
        assert!(cmd_check(&store, false).is_ok());
    }
}
