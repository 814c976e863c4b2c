mod recheck;
mod tools;
