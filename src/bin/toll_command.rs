use std::io::{self, Write};

use clap::{Parser, Subcommand};
use log::{debug, info};
use toll_network::{
    distance_matrix::{accumulation_policy::policy_by_name, distance_table::DistanceMatrix},
    edge_set::EdgeSet,
    error::TollError,
    threshold::{find_ids_within_threshold, ThresholdConfig, ThresholdMode},
    time_coverage::{time_check, IntervalRecord},
    toll_rates::{calculate_toll_rates, mean_rate, RateRow, VehicleClass},
    types::{IntervalKey, PointId},
    unroll::{unroll_distance_matrix, UnrolledRow},
    utils::{io::{create_output, open_input, read_distance_matrix, read_edges, read_rows, read_unrolled_rows, write_coverage_report, write_distance_matrix, write_point_ids, write_rows}, measure_time}
};

#[derive(Parser)]
struct Opts {

    #[clap(subcommand)]
    subcmd: SubCommand
}

#[derive(Subcommand)]
enum SubCommand {
    BuildMatrix(BuildMatrixCommand),
    Unroll(UnrollCommand),
    FilterThreshold(FilterThresholdCommand),
    TollRates(TollRatesCommand),
    CheckCoverage(CheckCoverageCommand),
    Pipeline(PipelineCommand)
}

#[derive(Parser)]
struct BuildMatrixCommand {

    /// csv file with id_start, id_end and distance columns
    #[clap(short, long)]
    edges: String,

    /// accumulation policy used to fill the matrix: direct or propagate
    #[clap(short, long, default_value = "direct")]
    policy: String,

    /// output csv file, stdout if omitted
    #[clap(short, long)]
    output: Option<String>
}

#[derive(Parser)]
struct UnrollCommand {

    /// csv file holding a distance matrix as written by build-matrix
    #[clap(short, long)]
    matrix: String,

    /// output csv file, stdout if omitted
    #[clap(short, long)]
    output: Option<String>
}

#[derive(Parser)]
struct FilterThresholdCommand {

    /// csv file with unrolled id_start, id_end and distance rows
    #[clap(short, long)]
    rows: String,

    /// id_start whose mean distance is the center of the band
    #[clap(long)]
    reference_id: PointId,

    /// half width of the band in percent
    #[clap(short, long, default_value = "10")]
    percentage: f64,

    /// row or candidate-mean
    #[clap(short, long, default_value = "row")]
    mode: ThresholdMode,

    /// output csv file, stdout if omitted
    #[clap(short, long)]
    output: Option<String>
}

#[derive(Parser)]
struct TollRatesCommand {

    /// csv file with unrolled id_start, id_end and distance rows
    #[clap(short, long)]
    rows: String,

    /// output csv file, stdout if omitted
    #[clap(short, long)]
    output: Option<String>
}

#[derive(Parser)]
struct CheckCoverageCommand {

    /// csv file with id, id_2, startDay, startTime, endDay and endTime columns
    #[clap(short, long)]
    intervals: String,

    /// output csv file, stdout if omitted
    #[clap(short, long)]
    output: Option<String>
}

#[derive(Parser)]
struct PipelineCommand {

    /// csv file with id_start, id_end and distance columns
    #[clap(short, long)]
    edges: String,

    /// accumulation policy used to fill the matrix: direct or propagate
    #[clap(short, long, default_value = "direct")]
    policy: String,

    /// output csv file with the toll rates, stdout if omitted
    #[clap(short, long)]
    output: Option<String>
}

fn main() -> Result<(), TollError> {
    env_logger::init();
    let opts: Opts = Opts::parse();

    match opts.subcmd {
        SubCommand::BuildMatrix(command) => {
            let edge_set: EdgeSet<PointId> = read_edges(open_input(&command.edges)?)?;
            let matrix = build_matrix(&edge_set, &command.policy)?;

            write_distance_matrix(output_writer(&command.output)?, &matrix)
        },
        SubCommand::Unroll(command) => {
            let matrix: DistanceMatrix<PointId> = read_distance_matrix(open_input(&command.matrix)?)?;
            let rows = unroll_distance_matrix(&matrix);
            info!("unrolled {} points into {} rows", matrix.len(), rows.len());

            write_rows(output_writer(&command.output)?, &rows)
        },
        SubCommand::FilterThreshold(command) => {
            let rows: Vec<UnrolledRow<PointId>> = read_unrolled_rows(open_input(&command.rows)?)?;
            let config = ThresholdConfig { percentage: command.percentage, mode: command.mode };
            let ids = find_ids_within_threshold(&rows, &command.reference_id, &config)?;
            info!("{} ids lie within {}% of reference {}", ids.len(), command.percentage, command.reference_id);

            write_point_ids(output_writer(&command.output)?, &ids)
        },
        SubCommand::TollRates(command) => {
            let rows: Vec<UnrolledRow<PointId>> = read_unrolled_rows(open_input(&command.rows)?)?;
            let rates: Vec<RateRow<PointId>> = calculate_toll_rates(&rows);
            log_mean_rates(&rates);

            write_rows(output_writer(&command.output)?, &rates)
        },
        SubCommand::CheckCoverage(command) => {
            let records: Vec<IntervalRecord<IntervalKey>> = read_rows(open_input(&command.intervals)?)?;
            let (check_time, report) = measure_time(|| time_check(records));
            let complete = report.values().filter(|complete| **complete).count();
            info!("{} of {} groups are complete, time required: {:?}", complete, report.len(), check_time);

            write_coverage_report(output_writer(&command.output)?, &report)
        },
        SubCommand::Pipeline(command) => {
            let edge_set: EdgeSet<PointId> = read_edges(open_input(&command.edges)?)?;
            let matrix = build_matrix(&edge_set, &command.policy)?;
            let rates = calculate_toll_rates(&unroll_distance_matrix(&matrix));
            log_mean_rates(&rates);

            write_rows(output_writer(&command.output)?, &rates)
        }
    }
}

fn build_matrix(edge_set: &EdgeSet<PointId>, policy_name: &str) -> Result<DistanceMatrix<PointId>, TollError> {
    let policy = policy_by_name(policy_name)?;
    let (build_time, matrix) = measure_time(|| DistanceMatrix::from_edges_with_policy(edge_set, policy.as_ref()));
    let matrix = matrix?;

    info!("distance matrix over {} points built from {} edges, time required: {:?}", matrix.len(), edge_set.len(), build_time);
    Ok(matrix)
}

fn log_mean_rates(rates: &[RateRow<PointId>]) {
    info!("calculated toll rates for {} rows", rates.len());

    for vehicle_class in VehicleClass::ALL {
        if let Some(mean) = mean_rate(rates, vehicle_class) {
            debug!("mean {} rate: {:.2}", vehicle_class.name(), mean);
        }
    }
}

fn output_writer(output: &Option<String>) -> Result<Box<dyn Write>, TollError> {
    match output {
        Some(path) => Ok(Box::new(create_output(path)?)),
        None => Ok(Box::new(io::stdout().lock()))
    }
}
