use crate::arrays::{
    ArgExtremaOptions, ArgSortOptions, DivisionOptions, MaskedArray, argmax, argmin, argsort,
    argsort_axis, division, division_masked,
};
use crate::error::Result;
use log::info;
use ndarray::{Axis, arr1, arr2};

pub fn array_examples(example: usize) -> Result<()> {
    match example {
        0 => {
            // the same data as slice, ndarray and masked array
            let a = vec![0, 4, 6, 2, 1, 5, 3, 5];
            let ii = argsort(&a, &ArgSortOptions::new());
            println!("argsort of {:?}: {:?}", a, ii);
            let ii = argsort(&a, &ArgSortOptions::new().reverse(true));
            println!("reverse argsort: {:?}", ii);

            let arr = arr1(&[0.0, 4.0, 6.0, 2.0, 1.0, 5.0, 3.0, 5.0]);
            println!("argsort of ndarray: {:?}", argsort(&arr, &ArgSortOptions::new()));

            let mask = vec![false, false, true, true, false, false, false, false];
            let ma = MaskedArray::from_vec(a.clone(), mask)?;
            println!(
                "masked argsort, masked last: {:?}",
                argsort(&ma, &ArgSortOptions::new())
            );
            println!(
                "masked argsort, fill value 1: {:?}",
                argsort(&ma, &ArgSortOptions::new().fill_value(1))
            );
            println!(
                "masked argmax {:?}, with fill value 6: {:?}",
                argmax(&ma, &ArgExtremaOptions::new()),
                argmax(&ma, &ArgExtremaOptions::new().fill_value(6))
            );
            println!("argmin of slice: {:?}", argmin(&a, &ArgExtremaOptions::new()));
        }
        1 => {
            let a = arr2(&[[3.0, 1.0, 2.0], [0.5, 9.0, -1.0]]);
            let ii = argsort_axis(&a, Axis(1), &ArgSortOptions::new());
            info!("row-wise argsort of \n{}\n is \n{}", a, ii);
            println!("row-wise argsort:\n{}", ii);
            println!("column-wise argsort:\n{}", argsort_axis(&a, Axis(0), &ArgSortOptions::new()));
        }
        2 => {
            let a = arr1(&[1.0, 1.0, 1.0]);
            let b = arr1(&[2.0, 1.0, 0.0]);
            println!("default: {}", division(&a, &b, &DivisionOptions::new())?);
            println!(
                "otherwise 0: {}",
                division(&a, &b, &DivisionOptions::new().otherwise(0.0))?
            );
            println!("prec 1: {}", division(&a, &b, &DivisionOptions::new().prec(1.0))?);
            let ma = MaskedArray::from_vec(vec![1.0, 2.0, 3.0], vec![false, true, false])?;
            let mb = MaskedArray::masked_invalid(arr1(&[2.0, 0.0, f64::NAN]));
            let q = division_masked(&ma, &mb, &DivisionOptions::new().otherwise(-9999.0))?;
            println!("masked division: data {} mask {}", q.data(), q.mask());
        }
        _ => println!("no array example {}", example),
    }
    Ok(())
}
