mod claim;
mod session;
