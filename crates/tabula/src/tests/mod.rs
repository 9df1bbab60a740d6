mod container_ops;
mod sorting;
