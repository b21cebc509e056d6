use clap::Parser;
use gpa_report::core::calculator::calculate_gpa;
use gpa_report::core::filename::{render_filename, DEFAULT_FILENAME};
use gpa_report::core::validator::{accept_student_name, validate_credit, validate_grade};
use gpa_report::domain::model::{GpaSummary, Report};
use gpa_report::utils::error::{ErrorSeverity, Result};
use gpa_report::utils::{logger, validation::Validate};
use gpa_report::{LocalStorage, ReportConfig, ReportWriter};

#[derive(Parser, Debug)]
#[command(name = "gpa-calc")]
#[command(about = "Calculate a weighted GPA from the command line without prompts")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Student name shown in the report
    #[arg(short, long)]
    name: String,

    /// Comma-separated grades on the 0.0-4.0 scale
    #[arg(short, long, value_delimiter = ',', required = true)]
    grades: Vec<String>,

    /// Comma-separated credits, one per grade
    #[arg(short, long, value_delimiter = ',', required = true)]
    credits: Vec<String>,

    /// Directory for the report file
    #[arg(long, default_value = "output")]
    output_dir: String,

    /// Report file name; supports {name} and {timestamp}
    #[arg(long, default_value = DEFAULT_FILENAME)]
    filename: String,

    /// Only print the result, do not write a report
    #[arg(long)]
    no_save: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if args.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    if let Err(e) = run(&args) {
        tracing::error!(
            "❌ GPA calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            // 輸入錯誤在非互動模式下也算失敗
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(args: &Args) -> Result<()> {
    let report_config = ReportConfig {
        output_directory: args.output_dir.clone(),
        filename_pattern: args.filename.clone(),
    };
    report_config.validate()?;

    // 非互動模式無法詢問，含數字的名稱只發出警告
    let student_name = accept_student_name(&args.name)?;
    let grades = args
        .grades
        .iter()
        .map(|g| validate_grade(g))
        .collect::<Result<Vec<_>>>()?;
    let credits = args
        .credits
        .iter()
        .map(|c| validate_credit(c))
        .collect::<Result<Vec<_>>>()?;

    let gpa = calculate_gpa(&grades, &credits)?;
    let summary = GpaSummary {
        student_name: student_name.clone(),
        course_count: grades.len(),
        total_credits: credits.iter().map(|&c| u64::from(c)).sum(),
        gpa,
    };

    if args.json {
        let json = serde_json::to_string_pretty(&summary)?;
        println!("{}", json);
    } else {
        println!("Student name: {}", summary.student_name);
        println!("Number of courses: {}", summary.course_count);
        println!("Total credits: {}", summary.total_credits);
        println!("GPA: {:.2}", summary.gpa);
    }

    if args.no_save {
        return Ok(());
    }

    let now = chrono::Local::now().naive_local();
    let filename = render_filename(&report_config.filename_pattern, &student_name, now);
    let report = Report::at(&student_name, &grades, &credits, gpa, now);
    let writer = ReportWriter::new(LocalStorage::new(report_config.output_directory.clone()));

    let path = writer.location(&filename);
    if writer.write(&report, &filename) {
        if !args.json {
            println!("📁 Report saved to: {}", path.display());
        }
    } else {
        eprintln!("⚠️ Failed to save report to {}", path.display());
    }

    Ok(())
}
