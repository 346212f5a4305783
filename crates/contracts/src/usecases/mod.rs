pub mod u101_cascade_select;
