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

//! reading decoded records from CSV text, as a stand-in for a live protocol decoder.
//! Each row holds one record, with the record kind as the first field:
//! ```text
//! # comment
//! air_position,<lon_rad>,<lat_rad>,<height_dm>
//! rc_status,<aileron>,<elevator>,<throttle>,<rudder>,<input_mode>,<real_mode>,<ioc_mode>,<rc_state>
//! motor_status,<status>
//! none
//! ```

use std::{fs::File, io::Read, path::Path, str::FromStr};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::warn;

use crate::errors::{parse_error, FlightPathError, Result};
use crate::record::RcStatus;
use crate::session::CaptureSession;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize)]
pub struct ImportStats {
    pub n_rows: usize,
    pub n_records: usize,
    pub n_skipped: usize,
}

/// feed all rows of `reader` into the session. Rows that can't be parsed or are rejected by the session
/// are logged and skipped. Only I/O and CSV framing errors abort the import
pub fn read_records<R: Read> (session: &mut CaptureSession, reader: R)->Result<ImportStats> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(reader);
    let mut stats = ImportStats::default();

    for result in rdr.records() {
        let row = result?;
        stats.n_rows += 1;

        match import_row( session, &row) {
            Ok(_) => stats.n_records += 1,
            Err(e) => {
                stats.n_skipped += 1;
                let line = row.position().map( |p| p.line()).unwrap_or(0);
                warn!("skipping line {}: {}", line, e);
            }
        }
    }

    Ok(stats)
}

pub fn read_records_from_file (session: &mut CaptureSession, path: impl AsRef<Path>)->Result<ImportStats> {
    let file = File::open( path)?;
    read_records( session, file)
}

fn import_row (session: &mut CaptureSession, row: &StringRecord)->Result<u64> {
    match row.get(0).unwrap_or("") {
        "air_position" => {
            check_len( row, 4)?;
            session.on_air_position( field(row,1)?, field(row,2)?, field(row,3)?)
        }
        "rc_status" => {
            check_len( row, 9)?;
            let rc = RcStatus {
                aileron: field(row,1)?,
                elevator: field(row,2)?,
                throttle: field(row,3)?,
                rudder: field(row,4)?,
                input_mode: field(row,5)?,
                real_mode: field(row,6)?,
                ioc_mode: field(row,7)?,
                rc_state: field(row,8)?,
            };
            Ok( session.on_rc_status(rc) )
        }
        "motor_status" => {
            check_len( row, 2)?;
            Ok( session.on_motor_status( field(row,1)?) )
        }
        "none" => Ok( session.on_unknown() ),
        other => Err( parse_error!("unknown record kind '{}'", other))
    }
}

fn check_len (row: &StringRecord, len: usize)->Result<()> {
    if row.len() == len {
        Ok(())
    } else {
        Err( parse_error!("expected {} fields, got {}", len, row.len()))
    }
}

fn field<T: FromStr> (row: &StringRecord, idx: usize)->Result<T> {
    let s = row.get(idx).ok_or_else( || parse_error!("missing field {}", idx))?;
    s.parse::<T>().map_err( |_| parse_error!("invalid field {}: '{}'", idx, s))
}
