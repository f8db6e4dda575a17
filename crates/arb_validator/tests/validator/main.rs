
mod fixes;
mod rules;
