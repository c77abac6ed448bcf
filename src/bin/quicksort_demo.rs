//! Sorts a fixed array and prints it before and after.

use lomsort::quicksort;

fn main() {
    let mut arr = vec![8, 7, 6, 1, 0, 9, 2];
    println!("original array:  {:?}", arr);

    quicksort(&mut arr);
    println!("sorted array:  {:?}", arr);
}
