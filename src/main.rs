//! Geo point clustering tool
//!
//! Reads weighted geographic records from CSV files, reduces them to a
//! target cluster count with hierarchical or k-means clustering, and
//! writes the resulting clusters back out.

use clap::{Parser, ValueEnum};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::path::PathBuf;

mod clustering;


use clustering::{Cluster, compute_distortion, hierarchical_clustering, kmeans_clustering};

/// Clustering strategy to apply
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Repeated closest-pair merging down to the target count
    Hierarchical,
    /// Fixed-budget nearest-center iteration
    Kmeans,
}

#[derive(Parser)]
#[command(name = "geocluster")]
#[command(about = "Hierarchical and k-means geo point clustering tool", long_about = None)]
struct Args {
    /// Input CSV file with id,horiz,vert,population,risk columns
    #[arg(short, long, default_value = "clusters.csv")]
    input: PathBuf,

    /// Output CSV file with resulting clusters (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Clustering method
    #[arg(short, long, value_enum, default_value_t = Method::Hierarchical)]
    method: Method,

    /// Target number of clusters
    #[arg(short, long, default_value_t = 15)]
    clusters: usize,

    /// Number of k-means iterations (ignored for hierarchical)
    #[arg(short = 'n', long, default_value_t = 5)]
    iterations: usize,

    /// Print the distortion of the resulting clustering
    #[arg(long)]
    distortion: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let records = match read_clusters_from_csv(&args.input) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error reading CSV: {}", e);
            std::process::exit(1);
        }
    };

    if records.is_empty() {
        eprintln!("No records found in CSV file");
        std::process::exit(1);
    }

    if args.debug {
        println!("Read {} records from {:?}", records.len(), args.input);
        println!(
            "Running {:?} clustering down to {} clusters",
            args.method, args.clusters
        );
    }

    let result = match args.method {
        Method::Hierarchical => hierarchical_clustering(&records, args.clusters),
        Method::Kmeans => kmeans_clustering(&records, args.clusters, args.iterations),
    };

    if args.debug {
        println!("Produced {} clusters", result.len());
    }

    if args.distortion {
        println!("Distortion: {}", compute_distortion(&result, &records));
    }

    match args.output {
        None => {
            if let Err(e) = write_clusters_to_stdout(&result) {
                eprintln!("Error writing to stdout: {}", e);
                std::process::exit(1);
            }
        }
        Some(output_file) => {
            if let Err(e) = write_clusters_to_csv(&output_file, &result) {
                eprintln!("Error writing CSV: {}", e);
                std::process::exit(1);
            }
            if args.debug {
                println!("Clusters written to {:?}", output_file);
            }
        }
    }
}

/// Reads singleton clusters from a CSV file
///
/// Expected format: `id,horiz,vert,population,risk` (header row is
/// optional). Rows with fewer than 5 fields or unparseable numeric
/// columns are skipped.
fn read_clusters_from_csv(filename: &PathBuf) -> Result<Vec<Cluster>, Box<dyn std::error::Error>> {
    let file = File::open(filename)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let record_vec: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        records.push(record_vec);
    }

    let mut clusters = Vec::new();
    if records.is_empty() {
        return Ok(clusters);
    }

    // Determine if first row is header: the id column is opaque text, so
    // probe the first numeric column instead.
    let has_header = records[0].len() < 2 || records[0][1].parse::<f64>().is_err();
    let start_idx = if has_header { 1 } else { 0 };

    for record in records.iter().skip(start_idx) {
        if record.len() < 5 {
            continue;
        }

        let horiz = record[1].parse::<f64>();
        let vert = record[2].parse::<f64>();
        let population = record[3].parse::<f64>();
        let risk = record[4].parse::<f64>();
        if let (Ok(horiz), Ok(vert), Ok(population), Ok(risk)) = (horiz, vert, population, risk) {
            clusters.push(Cluster::singleton(
                record[0].as_str(),
                horiz,
                vert,
                population,
                risk,
            ));
        }
    }

    Ok(clusters)
}

/// One output row per cluster: space-joined ids, then the aggregates
fn cluster_record(cluster: &Cluster) -> Vec<String> {
    let ids: Vec<&str> = cluster.ids().iter().map(|id| id.as_str()).collect();
    vec![
        ids.join(" "),
        cluster.horiz_center().to_string(),
        cluster.vert_center().to_string(),
        cluster.total_population().to_string(),
        cluster.averaged_risk().to_string(),
    ]
}

/// Writes resulting clusters to an output CSV file
fn write_clusters_to_csv(
    output_file: &PathBuf,
    clusters: &[Cluster],
) -> Result<(), Box<dyn std::error::Error>> {
    let out_file = File::create(output_file)?;
    let mut writer = WriterBuilder::new().from_writer(out_file);

    for cluster in clusters {
        writer.write_record(cluster_record(cluster))?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes resulting clusters to stdout, one `Display` line per cluster
fn write_clusters_to_stdout(clusters: &[Cluster]) -> Result<(), Box<dyn std::error::Error>> {
    for cluster in clusters {
        println!("{}", cluster);
    }
    Ok(())
}
