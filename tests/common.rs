#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn rmk() -> Command {
    cargo_bin_cmd!("rmarker")
}

/// Scratch directory plus a config path inside it that does not exist yet,
/// so every run uses the default settings and never touches $HOME.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> String {
        self.dir.path().join("rmarker.conf").to_string_lossy().to_string()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = rmk();
        cmd.args(["--config", &self.config()]);
        cmd
    }

    /// The three delivery notes used throughout the scenarios.
    pub fn sample_csv(&self) -> PathBuf {
        let path = self.file("albaranes.csv");
        fs::write(
            &path,
            "Nº,Cliente,Fecha envio,Importe\n\
             AB1234X,Ana,2024-03-05 00:00:00,10.5\n\
             AB9999Y,Luis,not a date,20\n\
             CD0001Z,Eva,05/03/2024,0\n",
        )
        .expect("write csv");
        path
    }

    /// Same data as [`Workspace::sample_csv`], with real date serials.
    pub fn sample_xlsx(&self) -> PathBuf {
        let path = self.file("albaranes.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        let date = Format::new().set_num_format("dd/mm/yyyy");

        for (col, h) in ["Nº", "Cliente", "Fecha envio", "Importe"].iter().enumerate() {
            sheet.write(0, col as u16, *h).expect("header");
        }

        let rows = [
            ("AB1234X", "Ana", Some(45356.0), 10.5),
            ("AB9999Y", "Luis", None, 20.0),
            ("CD0001Z", "Eva", Some(45356.0), 0.0),
        ];
        for (i, (code, client, serial, amount)) in rows.iter().enumerate() {
            let r = (i + 1) as u32;
            sheet.write(r, 0, *code).expect("code");
            sheet.write(r, 1, *client).expect("client");
            match serial {
                Some(s) => {
                    sheet.write_with_format(r, 2, *s, &date).expect("date");
                }
                None => {
                    sheet.write(r, 2, "??").expect("bad date");
                }
            }
            sheet.write(r, 3, *amount).expect("amount");
        }

        workbook.save(&path).expect("save xlsx");
        path
    }
}
