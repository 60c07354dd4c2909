use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(short, long, default_value = "data/sex_ratio_of_total_population.csv")]
    pub data: String,

    #[clap(short, long, default_value = "charts")]
    pub out_dir: String,
}

pub fn get_args() -> Args {
    Args::parse()
}
