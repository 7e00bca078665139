use crate::Utils::table_writer::{pretty_table, save_table_to_csv, table_to_rows};
use crate::error::{Result, SciError};
use crate::io::{
    HdfRequest, LifOptions, ReadOptions, fread, fread_header, hdf4read, hdf5read, lif, lif_maxcol,
    sread, sread_header,
};
use log::info;
use std::fs;
use std::path::PathBuf;

fn write_sample(name: &str, text: &str) -> Result<PathBuf> {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, text).map_err(|e| SciError::io(&path, e))?;
    Ok(path)
}

const SAMPLE: &str = "date,time,co2,h2o\n\
2020-01-01,00:30,410.2,8.1\n\
2020-01-01,01:00,411.7,\n\
# instrument restart\n\
2020-01-01,01:30,409.9,8.4\n";

pub fn io_examples(example: usize) -> Result<()> {
    match example {
        0 => {
            // strings and numbers from the same csv file
            let path = write_sample("rustedenvsci_sample.csv", SAMPLE)?;
            let (lines, ncol) = lif_maxcol(&path, &LifOptions::new().comment("#"))?;
            println!("{} lines, at most {} whitespace columns", lines, ncol);

            let opts = ReadOptions::new().skip(1).comment("#").fill(true);
            let header = sread_header(&path, &opts)?;
            let stamps = sread(&path, &opts.clone().nc_first(2))?;
            let values = fread(&path, &opts.clone().cskip(2))?;
            println!("header: {:?}", header);
            println!("time stamps: {:?}", stamps);
            println!("values: {:?}", values);
            info!("read {} data lines from {}", values.len(), path.display());
        }
        1 => {
            // select columns by header name, print and save them
            let path = write_sample("rustedenvsci_sample.csv", SAMPLE)?;
            let opts = ReadOptions::new()
                .skip(1)
                .comment("#")
                .cname(["h2o", "co2"])
                .fill_number(-9999.0);
            let header = fread_header(&path, &opts)?;
            let table = fread(&path, &opts)?;
            let headers = header.into_vector();
            let rows = table_to_rows(&table);
            println!("{}", pretty_table(headers.as_deref(), &rows));
            let out = std::env::temp_dir().join("rustedenvsci_selected.csv");
            save_table_to_csv(&rows, headers.as_deref(), &out)?;
            println!("saved to {}", out.display());
        }
        2 => {
            // reader options kept in a task file next to the data
            let path = write_sample("rustedenvsci_sample.csv", SAMPLE)?;
            let task = write_sample(
                "rustedenvsci_task.txt",
                "// how to read the flux file\n\
fread\n  skip: 1\n  cskip: 2\n  comment: #\n  separator: comma\n  fill: true\n",
            )?;
            let opts = ReadOptions::from_task_file(&task, "fread")?;
            let table = fread(&path, &opts)?;
            println!("{:?}", table.to_array()?);
            println!(
                "non comment lines: {}",
                lif(&path, &LifOptions::new().comment("#").noblank(true))?
            );
        }
        3 => {
            // scientific data files need the hdf5 or hdf4 feature
            let file = std::env::temp_dir().join("rustedenvsci_missing.h5");
            match hdf5read(&file, &HdfRequest::Variables { sort: true }) {
                Ok(out) => println!("{:?}", out),
                Err(e) => println!("hdf5: {}", e),
            }
            match hdf4read(&file, &HdfRequest::FileAttributes) {
                Ok(out) => println!("{:?}", out),
                Err(e) => println!("hdf4: {}", e),
            }
        }
        _ => println!("no io example {}", example),
    }
    Ok(())
}
