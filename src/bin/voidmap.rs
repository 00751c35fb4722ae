use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};

use voidmap::{analyze, Config, PointCloud};

#[derive(serde::Serialize)]
struct Output {
    version: &'static str,
    num_pore: usize,
    num_cavity: usize,
    num_occluded: usize,
    total_pore_volume: f64,
    total_cavity_volume: f64,
    largest_cavity_volume: f64,
    elapsed_ms: u128,
}

fn parse_pdb_atoms(path: &str) -> anyhow::Result<PointCloud> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut cloud = PointCloud::new();
    for line in reader.lines() {
        let l = line?;
        if !l.starts_with("ATOM") {
            continue;
        }
        if l.len() < 54 {
            continue;
        }
        // Skip alternate locations other than ' ' or 'A'.
        let alt = if l.len() >= 17 { l[16..17].chars().next().unwrap_or(' ') } else { ' ' };
        if alt != ' ' && alt != 'A' {
            continue;
        }
        let atom_name = l[12..16].trim().to_string();
        let element = if l.len() >= 78 { l[76..78].trim().to_string() } else { String::new() };
        if element.eq_ignore_ascii_case("H") || atom_name.starts_with('H') {
            continue;
        }
        let x: f64 = l[30..38].trim().parse().unwrap_or(0.0);
        let y: f64 = l[38..46].trim().parse().unwrap_or(0.0);
        let z: f64 = l[46..54].trim().parse().unwrap_or(0.0);
        cloud.push([x, y, z]);
    }
    Ok(cloud)
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: voidmap <pdb_file> [--voxel-size N] [--min-voxels N] [--min-volume N] [--json]"
        );
        std::process::exit(1);
    }
    let pdb = &args[1];
    let json = args.iter().any(|a| a == "--json");

    let mut config = Config::default();
    if let Some(value) = flag_value(&args, "--voxel-size") {
        config.voxel_size = value.parse()?;
    }
    if let Some(value) = flag_value(&args, "--min-voxels") {
        config.min_voxels = value.parse()?;
    }
    if let Some(value) = flag_value(&args, "--min-volume") {
        config.min_volume = Some(value.parse()?);
    }

    let cloud = parse_pdb_atoms(pdb)?;
    if cloud.is_empty() {
        anyhow::bail!("No atoms found in {}", pdb);
    }

    let t0 = std::time::Instant::now();
    let (annotation, voxels) = analyze(&cloud, &config)?;
    let elapsed = t0.elapsed().as_millis();

    if json {
        let out = Output {
            version: env!("CARGO_PKG_VERSION"),
            num_pore: annotation.pore.num,
            num_cavity: annotation.cavity.num,
            num_occluded: voxels.occluded.len(),
            total_pore_volume: annotation.pore.total_volume,
            total_cavity_volume: annotation.cavity.total_volume,
            largest_cavity_volume: annotation.cavity.largest_volume,
            elapsed_ms: elapsed,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Pores:    {} (total volume {:.2})", annotation.pore.num, annotation.pore.total_volume);
        println!("Cavities: {} (total volume {:.2}, largest {:.2})", annotation.cavity.num, annotation.cavity.total_volume, annotation.cavity.largest_volume);
        println!("Pockets:  {}", annotation.pocket.num);
        println!("Hubs:     {}", annotation.hub.num);
        println!("Occluded: {}", voxels.occluded.len());
        println!("Elapsed: {} ms", elapsed);
    }
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}
