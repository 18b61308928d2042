use std::fs;
use std::path::Path;

use gdal::DriverManager;
use gdal::raster::Buffer;

use okaprep::core::config::AggregateConfig;
use okaprep::io::tables::read_table;
use okaprep::{GdalRasterReader, SamplePoint, extract_year};

const SENTINEL: f64 = 9999.0;
const NODATA: f64 = -1.0;

/// 2x2 GeoTIFF covering lon 10..12, lat 48..50, one pixel per degree.
/// `cells` is row-major from the top-left pixel.
fn write_raster(path: &Path, cells: [f64; 4]) {
    let driver = DriverManager::get_driver_by_name("GTiff").unwrap();
    let mut dataset = driver
        .create_with_band_type::<f64, _>(path, 2, 2, 1)
        .unwrap();
    dataset
        .set_geo_transform(&[10.0, 1.0, 0.0, 50.0, 0.0, -1.0])
        .unwrap();

    let mut band = dataset.rasterband(1).unwrap();
    band.set_no_data_value(Some(NODATA)).unwrap();
    let mut buf = Buffer::new((2, 2), cells.to_vec());
    band.write((0, 0), (2, 2), &mut buf).unwrap();
}

/// Pixel centers of the 2x2 grid, plus one point far outside the raster.
fn sample_points() -> Vec<SamplePoint> {
    vec![
        SamplePoint::new(10.5, 49.5),
        SamplePoint::new(11.5, 49.5),
        SamplePoint::new(10.5, 48.5),
        SamplePoint::new(11.5, 48.5),
        SamplePoint::new(150.0, -60.0),
    ]
}

#[test]
fn sampling_maps_sentinel_nodata_and_outside_points_to_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("2019_era5-a.tif");
    write_raster(&path, [SENTINEL, 5.0, NODATA, 20.0]);

    let reader = GdalRasterReader::open(&path).unwrap();
    let points = sample_points();
    let table = reader.sample_points(&points, SENTINEL).unwrap();

    assert_eq!(table.columns(), ["band_1"]);
    assert_eq!(table.get(0, 0), None); // sentinel cell
    assert_eq!(table.get(1, 0), Some(5.0));
    assert_eq!(table.get(2, 0), None); // band nodata
    assert_eq!(table.get(3, 0), Some(20.0));
    assert_eq!(table.get(4, 0), None); // outside the raster
}

#[test]
fn extract_year_merges_files_first_wins_and_writes_the_year_csv() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("rasters");
    let dst = dir.path().join("out");
    fs::create_dir_all(&src).unwrap();

    // Sorted merge order: "-a" before "-b". The first file has a sentinel
    // gap the second fills; its 99s must not overwrite filled cells.
    write_raster(&src.join("2019_era5-a.tif"), [SENTINEL, 5.0, NODATA, 20.0]);
    write_raster(&src.join("2019_era5-b.tif"), [7.0, 99.0, 99.0, 99.0]);
    // No '-' source tag, so the year scan must ignore it (it is not
    // even a raster).
    fs::write(src.join("2019_era5.tif"), b"not a raster").unwrap();

    let config = AggregateConfig::new(&src, &dst, 2019, 2019);
    let points = sample_points();

    let written = extract_year(&config, &points, 2019).unwrap();
    assert_eq!(written, Some(config.year_csv_path(2019)));

    let table = read_table(&config.year_csv_path(2019)).unwrap();
    assert_eq!(table.points(), points.as_slice());
    assert_eq!(table.get(0, 0), Some(7.0)); // sentinel gap filled by file b
    assert_eq!(table.get(1, 0), Some(5.0)); // file a wins over file b's 99
    assert_eq!(table.get(2, 0), Some(99.0)); // nodata gap filled by file b
    assert_eq!(table.get(3, 0), Some(20.0));
    assert_eq!(table.get(4, 0), None); // outside every file, stays missing
}

#[test]
fn extract_year_without_matching_files_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("rasters");
    let dst = dir.path().join("out");
    fs::create_dir_all(&src).unwrap();
    write_raster(&src.join("2018_era5-a.tif"), [1.0, 2.0, 3.0, 4.0]);

    let config = AggregateConfig::new(&src, &dst, 2018, 2019);
    let points = sample_points();

    let written = extract_year(&config, &points, 2019).unwrap();
    assert_eq!(written, None);
    assert!(!config.year_csv_path(2019).exists());
}
