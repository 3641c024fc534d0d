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

use std::slice;
use crate::record::{Record, RecordData, RecordKind};

/// append-only, capture-ordered sequence of telemetry records.
/// Sequence numbers are 1-based, i.e. the first appended record gets sequence 1.
/// There is no removal - the store only grows while a capture is scanned and is then updated in place
/// by the reconstructor. The store is not synchronized, callers have to ensure appends are not
/// concurrent with reads (see [`crate::session::CaptureSession`])
#[derive(Debug,Clone,Default)]
pub struct RecordStore {
    records: Vec<Record>
}

impl RecordStore {
    pub fn new ()->Self {
        RecordStore { records: Vec::new() }
    }

    pub fn with_capacity (capacity: usize)->Self {
        RecordStore { records: Vec::with_capacity(capacity) }
    }

    /// add record data at the end and return the sequence number assigned to it
    pub fn append (&mut self, data: RecordData)->u64 {
        let sequence = self.records.len() as u64 + 1;
        self.records.push( Record::new( sequence, data));
        sequence
    }

    /// restartable iterator over all records in insertion order
    pub fn iter (&self)->slice::Iter<'_,Record> {
        self.records.iter()
    }

    pub fn air_positions (&self)->impl Iterator<Item=&Record> {
        self.records.iter().filter( |r| r.kind() == RecordKind::AirPosition)
    }

    pub fn get (&self, sequence: u64)->Option<&Record> {
        if sequence == 0 { None } else { self.records.get( (sequence - 1) as usize) }
    }

    pub fn len (&self)->usize { self.records.len() }

    pub fn is_empty (&self)->bool { self.records.is_empty() }

    pub fn count (&self, kind: RecordKind)->usize {
        self.records.iter().filter( |r| r.kind() == kind).count()
    }

    pub (crate) fn records_mut (&mut self)->&mut [Record] {
        self.records.as_mut_slice()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a,Record>;

    fn into_iter (self)->Self::IntoIter { self.records.iter() }
}
