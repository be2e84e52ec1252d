//! Integration tests for bb-output.

use bb_core::{BinId, BotId, Chip, Directive, Target};

fn example() -> Vec<Directive> {
    let bot = |id| Target::Bot(BotId(id));
    let bin = |id| Target::Bin(BinId(id));
    vec![
        Directive::Input { value: Chip(5), bot: BotId(2) },
        Directive::Route { bot: BotId(2), low: bot(1), high: bot(0) },
        Directive::Input { value: Chip(3), bot: BotId(1) },
        Directive::Route { bot: BotId(1), low: bin(1), high: bot(0) },
        Directive::Route { bot: BotId(0), low: bin(2), high: bin(0) },
        Directive::Input { value: Chip(2), bot: BotId(2) },
    ]
}

fn records(bytes: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rdr = csv::Reader::from_reader(bytes);
    let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
    let rows = rdr
        .records()
        .map(|r| r.unwrap().iter().map(str::to_owned).collect())
        .collect();
    (headers, rows)
}

#[cfg(test)]
mod fire_csv_tests {
    use std::cell::Cell;
    use std::io::{self, Write};
    use std::rc::Rc;

    use tempfile::TempDir;

    use bb_engine::{Engine, EngineBuilder};

    use super::*;
    use crate::FireCsvObserver;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn one_row_per_fire() {
        let obs = FireCsvObserver::new(Vec::new()).unwrap();
        let mut engine = EngineBuilder::new().observer(obs).build().unwrap();
        engine.run(&example()).unwrap();

        let mut obs = engine.into_observer();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows(), 3);

        let bytes = obs.into_inner().unwrap();
        let (headers, rows) = records(&bytes);
        assert_eq!(headers, ["bot", "low", "high", "depth"]);
        assert_eq!(rows, vec![
            vec!["2", "2", "5", "1"],
            vec!["1", "2", "3", "2"],
            vec!["0", "3", "5", "3"],
        ]);
    }

    #[test]
    fn header_only_without_fires() {
        let mut obs = FireCsvObserver::new(Vec::new()).unwrap();
        obs.finish().unwrap();
        obs.finish().unwrap();
        let (headers, rows) = records(&obs.into_inner().unwrap());
        assert_eq!(headers.len(), 4);
        assert!(rows.is_empty());
    }

    /// Writer whose first `flush` fails; counts every flush attempt.
    struct FlakyFlush {
        buf:     Vec<u8>,
        flushes: Rc<Cell<usize>>,
    }

    impl Write for FlakyFlush {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes.set(self.flushes.get() + 1);
            if self.flushes.get() == 1 {
                return Err(io::Error::new(io::ErrorKind::Other, "disk busy"));
            }
            Ok(())
        }
    }

    #[test]
    fn failed_finish_is_retried() {
        let flushes = Rc::new(Cell::new(0));
        let writer = FlakyFlush { buf: Vec::new(), flushes: Rc::clone(&flushes) };
        let mut obs = FireCsvObserver::new(writer).unwrap();

        assert!(obs.finish().is_err());
        obs.finish().unwrap();
        assert_eq!(flushes.get(), 2, "second finish must flush again");
        obs.finish().unwrap();
        assert_eq!(flushes.get(), 2);

        let inner = obs.into_inner().unwrap();
        let (headers, _) = records(&inner.buf);
        assert_eq!(headers, ["bot", "low", "high", "depth"]);
    }

    #[test]
    fn create_writes_file() {
        let dir = tmp();
        let path = dir.path().join("fires.csv");
        let obs = FireCsvObserver::create(&path).unwrap();
        let mut engine = Engine::new().with_observer(obs);
        engine.run(&example()).unwrap();
        engine.into_observer().finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        assert_eq!(rdr.records().count(), 3);
    }
}

#[cfg(test)]
mod bins_csv_tests {
    use bb_engine::Engine;

    use super::*;
    use crate::write_bins_csv;

    #[test]
    fn bins_in_id_order_with_positions() {
        let mut engine = Engine::new();
        engine.run(&example()).unwrap();
        engine
            .run([
                Directive::Route {
                    bot:  BotId(7),
                    low:  Target::Bin(BinId(1)),
                    high: Target::Bin(BinId(4)),
                },
                Directive::Input { value: Chip(9), bot: BotId(7) },
                Directive::Input { value: Chip(1), bot: BotId(7) },
            ])
            .unwrap();

        let mut out = Vec::new();
        write_bins_csv(engine.registry(), &mut out).unwrap();
        let (headers, rows) = records(&out);
        assert_eq!(headers, ["bin", "position", "chip"]);
        assert_eq!(rows, vec![
            vec!["0", "0", "5"],
            vec!["1", "0", "2"],
            vec!["1", "1", "1"],
            vec!["2", "0", "3"],
            vec!["4", "0", "9"],
        ]);
    }
}
