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

use flightpath_common::{approx_eq, datetime::EpochMillis, geo_constants::{METERS_PER_DEG_LAT, METERS_PER_DEG_LON_AT_EQUATOR}};
use flightpath_track::record::{AirPosition, LonLat, RcStatus, Record, RecordData};
use flightpath_track::track::SampleClock;
use flightpath_track::{EntitySpec, PathReconstructor, RecordStore, RigidOffset, TrackBuilder};

// run with "cargo test --test test_track -- --nocapture"

const EPS: f64 = 1e-9;

fn measured (store: &mut RecordStore, lon: f64, lat: f64, alt: f64)->u64 {
    store.append( RecordData::AirPosition( AirPosition::new( Some(LonLat::new( lon, lat)), alt)))
}

fn unset (store: &mut RecordStore, alt: f64)->u64 {
    store.append( RecordData::AirPosition( AirPosition::unset( alt)))
}

fn builder (epoch_millis: i64)->TrackBuilder {
    TrackBuilder::new( SampleClock::new( EpochMillis::new( epoch_millis), 100.0))
}

fn reconstructed_store ()->RecordStore {
    let mut store = RecordStore::new();
    unset( &mut store, 0.0);                        // 1 - never resolved
    measured( &mut store, 7.0, 46.0, 10.0);         // 2
    store.append( RecordData::RcStatus( RcStatus::default())); // 3
    unset( &mut store, 12.0);                       // 4 - interpolated
    measured( &mut store, 7.3, 46.3, 14.0);         // 5
    unset( &mut store, 15.0);                       // 6 - never resolved
    PathReconstructor::default().finalize( &mut store);
    store
}

#[test]
fn test_single_record_static_path () {
    let mut store = RecordStore::new();
    measured( &mut store, -117.25, 34.5, 80.0);
    PathReconstructor::default().finalize( &mut store);

    let path = builder(0).build_static_path( &store);
    assert_eq!( path.len(), 1);
    assert_eq!( path[0].longitude_degrees(), -117.25);
    assert_eq!( path[0].latitude_degrees(), 34.5);
    assert_eq!( path[0].altitude_meters(), 80.0);
}

#[test]
fn test_static_path_contains_interpolated_points () {
    let store = reconstructed_store();
    let path = builder(0).build_static_path( &store);
    for p in &path { println!("{p}"); }

    assert_eq!( path.len(), 3);
    assert!( approx_eq( path[1].longitude_degrees(), 7.2, EPS)); // 2/3 of the way from #2 to #5
    assert!( approx_eq( path[1].latitude_degrees(), 46.2, EPS));
    assert_eq!( path[1].altitude_meters(), 12.0);
}

#[test]
fn test_dynamic_path_without_offset_matches_static_path () {
    let store = reconstructed_store();
    let tb = builder(0);
    let path = tb.build_static_path( &store);
    let track = tb.build_dynamic_path( &store, &EntitySpec::new( "aircraft", RigidOffset::ZERO, 0.0));

    assert_eq!( track.name, "aircraft");
    assert_eq!( track.len(), path.len());
    for (tp,p) in track.points.iter().zip( path.iter()) {
        assert_eq!( tp.position.longitude_degrees(), p.longitude_degrees());
        assert_eq!( tp.position.latitude_degrees(), p.latitude_degrees());
        assert_eq!( tp.position.altitude_meters(), p.altitude_meters());
    }
}

#[test]
fn test_dynamic_path_adds_ground_altitude () {
    let store = reconstructed_store();
    let tb = builder(0);
    let path = tb.build_static_path( &store);
    let track = tb.build_dynamic_path( &store, &EntitySpec::new( "aircraft", RigidOffset::ZERO, 500.0));

    for (tp,p) in track.points.iter().zip( path.iter()) {
        assert_eq!( tp.position.longitude_degrees(), p.longitude_degrees());
        assert!( approx_eq( tp.position.altitude_meters(), p.altitude_meters() + 500.0, EPS));
    }
}

#[test]
fn test_dynamic_path_timestamps () {
    let store = reconstructed_store();
    let epoch = 1_700_000_000_500; // not on a full second
    let track = builder( epoch).build_dynamic_path( &store, &EntitySpec::new( "aircraft", RigidOffset::ZERO, 0.0));

    let times: Vec<i64> = track.points.iter().map( |tp| tp.time.millis()).collect();
    println!("times: {times:?}");

    // records #2, #4 and #5 at 100Hz, first one truncated to the full second
    assert_eq!( times, vec![ 1_700_000_000_000, epoch + 40, epoch + 50]);
}

#[test]
fn test_entity_offsets () {
    let mut store = RecordStore::new();
    measured( &mut store, 0.0, 0.0, 0.0); // a real position at null island, not a sentinel
    measured( &mut store, 1.0, 0.0, 0.0);

    let offset = RigidOffset::new( 0.175, -0.175, 0.1);
    let track = builder(0).build_dynamic_path( &store, &EntitySpec::new( "propeller 4", offset, 500.0));
    let p = &track.points[0].position;
    println!("propeller position: {p}");

    assert!( approx_eq( p.longitude_degrees(), 0.175 / METERS_PER_DEG_LON_AT_EQUATOR, 1e-12));
    assert!( approx_eq( p.latitude_degrees(), -0.175 / METERS_PER_DEG_LAT, 1e-12));
    assert!( approx_eq( p.altitude_meters(), 500.1, EPS));
}

#[test]
fn test_builder_does_not_mutate_store () {
    let store = reconstructed_store();
    let before: Vec<Record> = store.iter().cloned().collect();

    let entities = vec![
        EntitySpec::new( "aircraft", RigidOffset::ZERO, 500.0),
        EntitySpec::new( "propeller 1", RigidOffset::new( 0.175, 0.175, 0.1), 500.0),
        EntitySpec::new( "propeller 2", RigidOffset::new( -0.175, 0.175, 0.1), 500.0),
    ];
    let tracks = builder(0).build_entity_tracks( &store, &entities);

    let after: Vec<Record> = store.iter().cloned().collect();
    assert_eq!( before, after);

    let names: Vec<&str> = tracks.iter().map( |t| t.name.as_str()).collect();
    assert_eq!( names, vec!["aircraft", "propeller 1", "propeller 2"]);
    assert!( tracks.iter().all( |t| t.len() == 3));

    // all entities share the same clock
    assert_eq!( tracks[0].points[1].time, tracks[2].points[1].time);
}

#[test]
fn test_timestamps_saturate () {
    let store = reconstructed_store();
    let tb = TrackBuilder::new( SampleClock::new( EpochMillis::from_secs(1), 1e-300));
    let track = tb.build_dynamic_path( &store, &EntitySpec::new( "aircraft", RigidOffset::ZERO, 0.0));
    println!("times: {:?}", track.points.iter().map( |tp| tp.time.millis()).collect::<Vec<_>>());

    assert_eq!( track.len(), 3);
    assert_eq!( track.points[2].time, EpochMillis::new( i64::MAX));
}
