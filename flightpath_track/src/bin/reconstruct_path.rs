/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use std::{fs::File, io::{self, BufWriter, Write}, path::PathBuf};
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use flightpath_track::{
    import::read_records_from_file, load_flightpath_config,
    CaptureSession, DocumentEmitter, FlightPathConfig, JsonEmitter
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "reconstruct a flight path document from decoded flight log records")]
pub struct Args {
    /// RON config file (defaults are used if not set)
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// output file (stdout if not set)
    #[arg(short,long)]
    pub output: Option<PathBuf>,

    /// document name
    #[arg(short,long, default_value = "flight path")]
    pub name: String,

    /// pretty print JSON output
    #[arg(short,long)]
    pub pretty: bool,

    /// CSV file with decoded records
    pub input: PathBuf,
}

fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .with_writer( io::stderr)
        .init();

    let args = Args::parse();

    let config: FlightPathConfig = match &args.config {
        Some(path) => load_flightpath_config( path)?,
        None => FlightPathConfig::default()
    };

    let mut session = CaptureSession::new( config)?;
    let import_stats = read_records_from_file( &mut session, &args.input)?;
    info!("read {} rows from {:?}, skipped {}", import_stats.n_rows, args.input, import_stats.n_skipped);

    let capture = session.finalize();
    let doc = capture.document( &args.name);

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new( BufWriter::new( File::create(path)?)),
        None => Box::new( io::stdout().lock())
    };
    let mut emitter = if args.pretty { JsonEmitter::pretty(writer) } else { JsonEmitter::new(writer) };
    emitter.emit( &doc)?;

    info!("emitted {} path points and {} entity tracks", doc.static_path.len(), doc.tracks.len());
    Ok(())
}
