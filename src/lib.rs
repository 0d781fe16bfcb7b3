//! Klien pendaftaran Mini Bootcamp Fullstack JavaScript.
//!
//! Form terminal: kumpulkan data pendaftar, validasi dengan skema
//! deklaratif, kirim sebagai JSON ke API bootcamp, dan laporkan hasilnya
//! lewat dialog. Modul diekspos sebagai library supaya alur form bisa
//! diuji tanpa terminal (lihat [`ui::TestBackend`]).

pub mod config;
pub mod dtos;
pub mod flow;
pub mod form;
pub mod models;
pub mod services;
pub mod ui;
