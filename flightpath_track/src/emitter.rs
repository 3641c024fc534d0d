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

use std::io::Write;
use serde::Serialize;
use flightpath_common::geo::GeoPoint3;

use crate::errors::Result;
use crate::reconstruct::Viewpoint;
use crate::track::EntityTrack;

/// everything a document emitter gets to see from a reconstructed capture
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct FlightPathDocument {
    pub name: String,
    pub viewpoint: Viewpoint,
    pub static_path: Vec<GeoPoint3>,
    pub tracks: Vec<EntityTrack>,
}

/// the seam to document formats (KML, CZML ..). Implementations own all syntax and styling
pub trait DocumentEmitter {
    fn emit (&mut self, doc: &FlightPathDocument)->Result<()>;
}

/// writes documents as JSON
pub struct JsonEmitter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new (writer: W)->Self { JsonEmitter { writer, pretty: false } }

    pub fn pretty (writer: W)->Self { JsonEmitter { writer, pretty: true } }

    pub fn into_inner (self)->W { self.writer }
}

impl<W: Write> DocumentEmitter for JsonEmitter<W> {
    fn emit (&mut self, doc: &FlightPathDocument)->Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty( &mut self.writer, doc)?;
        } else {
            serde_json::to_writer( &mut self.writer, doc)?;
        }
        self.writer.write_all( b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
