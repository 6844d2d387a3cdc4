use anyhow::Result;
use logforge_core::{err::Error, Catalog, Generator, Options};
use rand::{rngs::SmallRng, SeedableRng};
use std::{collections::HashSet, error::Error as _, fs, num::NonZeroUsize, path::Path};
use time::OffsetDateTime;

fn options(out: &Path, count: usize, lines: usize) -> Options {
    Options {
        out: out.to_path_buf(),
        count,
        lines,
        ..Options::default()
    }
}

fn now() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_771_699_510).unwrap()
}

fn file_names(dir: &Path) -> Result<HashSet<String>> {
    let mut names = HashSet::new();
    for entry in fs::read_dir(dir)? {
        names.insert(entry?.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

#[test]
fn writes_requested_files_and_lines() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut generator = Generator::new(
        options(dir.path(), 3, 10),
        &Catalog::DEFAULT,
        SmallRng::seed_from_u64(1),
    )?;
    let created = generator.run_at(now())?;

    assert_eq!(created.len(), 3);
    assert_eq!(file_names(dir.path())?.len(), 3);
    for path in &created {
        assert!(path.starts_with(dir.path()));
        assert_eq!(path.extension().unwrap(), "log");

        let text = fs::read_to_string(path)?;
        assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|l| !l.is_empty()));
        assert!(lines.iter().all(|l| l.starts_with("2026-02-2")));
    }
    Ok(())
}

#[test]
fn default_line_count() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let opts = Options {
        out: dir.path().to_path_buf(),
        count: 1,
        ..Options::default()
    };
    let created = Generator::new(opts, &Catalog::DEFAULT, SmallRng::seed_from_u64(2))?.run()?;
    assert_eq!(fs::read_to_string(&created[0])?.lines().count(), 200);
    Ok(())
}

#[test]
fn creates_missing_directories() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("nested").join("logs");
    assert!(!out.exists());

    Generator::new(options(&out, 2, 5), &Catalog::DEFAULT, SmallRng::seed_from_u64(3))?
        .run_at(now())?;
    assert_eq!(file_names(&out)?.len(), 2);

    // existing directory is fine too
    Generator::new(options(&out, 1, 5), &Catalog::DEFAULT, SmallRng::seed_from_u64(4))?
        .run_at(now())?;
    assert_eq!(file_names(&out)?.len(), 3);
    Ok(())
}

#[test]
fn repeated_runs_never_overwrite() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let first = Generator::new(
        options(dir.path(), 4, 3),
        &Catalog::DEFAULT,
        SmallRng::seed_from_u64(5),
    )?
    .run_at(now())?;
    let before: Vec<String> = first
        .iter()
        .map(fs::read_to_string)
        .collect::<Result<_, _>>()?;

    // same seed replays the same names, forcing collisions
    let second = Generator::new(
        options(dir.path(), 4, 3),
        &Catalog::DEFAULT,
        SmallRng::seed_from_u64(5),
    )?
    .run_at(now())?;

    assert_eq!(file_names(dir.path())?.len(), 8);
    assert!(second.iter().all(|p| !first.contains(p)));
    for (path, text) in first.iter().zip(before) {
        assert_eq!(fs::read_to_string(path)?, text);
    }
    Ok(())
}

#[test]
fn fills_a_tiny_name_space() -> Result<()> {
    let catalog = Catalog {
        name_parts: &["app", "db"],
        suffixes: &["prod"],
        ..Catalog::DEFAULT
    };
    // app-prod, db-prod, app-db-prod, db-app-prod
    let dir = tempfile::tempdir()?;
    let created = Generator::new(options(dir.path(), 4, 1), &catalog, SmallRng::seed_from_u64(6))?
        .run_at(now())?;

    let names = file_names(dir.path())?;
    assert_eq!(created.len(), 4);
    assert_eq!(
        names,
        ["app-prod.log", "db-prod.log", "app-db-prod.log", "db-app-prod.log"]
            .into_iter()
            .map(String::from)
            .collect::<HashSet<_>>()
    );
    Ok(())
}

#[test]
fn exhausted_name_space_fails() -> Result<()> {
    let catalog = Catalog {
        name_parts: &["app"],
        suffixes: &["prod", "dev"],
        ..Catalog::DEFAULT
    };
    let dir = tempfile::tempdir()?;
    let opts = Options {
        max_attempts: NonZeroUsize::new(50).unwrap(),
        ..options(dir.path(), 3, 2)
    };
    let err = Generator::new(opts, &catalog, SmallRng::seed_from_u64(7))?
        .run_at(now())
        .unwrap_err();

    assert!(matches!(err, Error::NamesExhausted { attempts: 50 }), "{err}");
    // the two names that fit were written and kept
    assert_eq!(file_names(dir.path())?.len(), 2);
    Ok(())
}

#[test]
fn seeded_runs_are_reproducible() -> Result<()> {
    let a = tempfile::tempdir()?;
    let b = tempfile::tempdir()?;
    let run = |dir: &Path| -> Result<Vec<String>> {
        let created = Generator::new(
            options(dir, 2, 20),
            &Catalog::DEFAULT,
            SmallRng::seed_from_u64(99),
        )?
        .run_at(now())?;
        let mut out = Vec::new();
        for path in created {
            out.push(path.file_name().unwrap().to_string_lossy().into_owned());
            out.push(fs::read_to_string(path)?);
        }
        Ok(out)
    };
    assert_eq!(run(a.path())?, run(b.path())?);
    Ok(())
}

#[test]
fn rejects_empty_catalog() {
    let catalog = Catalog {
        suffixes: &[],
        ..Catalog::DEFAULT
    };
    let result = Generator::new(Options::default(), &catalog, SmallRng::seed_from_u64(0));
    assert!(matches!(result, Err(Error::EmptyCatalog("suffixes"))));
}

#[test]
fn io_errors_name_the_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "")?;
    let out = blocker.join("logs");

    let err = Generator::new(options(&out, 1, 1), &Catalog::DEFAULT, SmallRng::seed_from_u64(8))?
        .run_at(now())
        .unwrap_err();

    match &err {
        Error::IoAt { path, .. } => assert_eq!(path, &out),
        other => panic!("unexpected error {other:?}"),
    }
    let message = err.to_string();
    assert_eq!(message, format!("i/o error on {}", out.display()));
    // the os error is only reported once, as the source
    let source = err.source().unwrap().to_string();
    assert!(!message.contains(&source));
    Ok(())
}
