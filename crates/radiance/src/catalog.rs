//! The curated use-case catalog embedded in the binary.

use crate::model::UseCaseRecord;

fn curated(
  id: i64,
  name: &str,
  category: &str,
  technology: &str,
  description: &str,
  maturity: f64,
  adoption: f64,
  tags: &[&str],
) -> UseCaseRecord {
  UseCaseRecord {
    id,
    name: name.to_string(),
    category: category.to_string(),
    technology: technology.to_string(),
    description: description.to_string(),
    maturity,
    adoption,
    tags: tags.iter().map(|tag| tag.to_string()).collect(),
    company: None,
    website: None,
    submitted_at: None,
  }
}

/// Returns the curated records in catalog order.
pub fn curated_catalog() -> Vec<UseCaseRecord> {
  vec![
    // Grid Management & Smart Grid
    curated(
      1,
      "Grid Load Forecasting",
      "Grid Management & Smart Grid",
      "Machine Learning",
      "AI-powered electricity demand forecasting for grid optimization",
      0.9,
      0.8,
      &["load forecasting", "grid optimization", "demand prediction"],
    ),
    curated(
      2,
      "Smart Grid Monitoring",
      "Grid Management & Smart Grid",
      "Machine Learning",
      "Real-time monitoring and anomaly detection in power grids",
      0.8,
      0.7,
      &["grid monitoring", "anomaly detection", "real-time"],
    ),
    curated(
      3,
      "Grid Stability Control",
      "Grid Management & Smart Grid",
      "Machine Learning",
      "AI-driven grid stability and frequency control systems",
      0.7,
      0.6,
      &["grid stability", "frequency control", "automation"],
    ),
    // Renewable Energy
    curated(
      4,
      "Solar Power Forecasting",
      "Renewable Energy",
      "Machine Learning",
      "Weather-based solar power generation prediction",
      0.9,
      0.8,
      &["solar forecasting", "weather prediction", "renewables"],
    ),
    curated(
      5,
      "Wind Power Optimization",
      "Renewable Energy",
      "Machine Learning",
      "AI optimization of wind turbine performance and maintenance",
      0.8,
      0.7,
      &["wind optimization", "turbine maintenance", "performance"],
    ),
    curated(
      6,
      "Renewable Integration",
      "Renewable Energy",
      "Predictive Analytics",
      "AI systems for integrating variable renewable energy sources",
      0.7,
      0.6,
      &["renewable integration", "variable sources", "grid balancing"],
    ),
    // Energy Trading & Markets
    curated(
      7,
      "Energy Price Prediction",
      "Energy Trading & Markets",
      "Machine Learning",
      "AI-powered energy price forecasting for trading decisions",
      0.8,
      0.7,
      &["price prediction", "energy trading", "market analysis"],
    ),
    curated(
      8,
      "Trading Algorithm Optimization",
      "Energy Trading & Markets",
      "Machine Learning",
      "AI-driven optimization of energy trading algorithms",
      0.7,
      0.6,
      &["trading algorithms", "optimization", "automated trading"],
    ),
    curated(
      9,
      "Market Risk Assessment",
      "Energy Trading & Markets",
      "Predictive Analytics",
      "AI-based risk assessment for energy market operations",
      0.6,
      0.5,
      &["risk assessment", "market risk", "trading risk"],
    ),
    // Energy Storage
    curated(
      10,
      "Battery Management Systems",
      "Energy Storage",
      "Machine Learning",
      "AI-powered battery health monitoring and optimization",
      0.8,
      0.7,
      &["battery management", "health monitoring", "optimization"],
    ),
    curated(
      11,
      "Storage Optimization",
      "Energy Storage",
      "Machine Learning",
      "AI optimization of energy storage charging/discharging cycles",
      0.7,
      0.6,
      &["storage optimization", "charging cycles", "energy management"],
    ),
    curated(
      12,
      "Grid-Scale Storage Control",
      "Energy Storage",
      "Expert Systems",
      "AI control systems for grid-scale energy storage facilities",
      0.6,
      0.5,
      &["grid storage", "control systems", "large-scale"],
    ),
    // Energy Efficiency
    curated(
      13,
      "Building Energy Management",
      "Energy Efficiency",
      "Machine Learning",
      "AI-powered building energy optimization and management",
      0.8,
      0.7,
      &["building management", "energy efficiency", "optimization"],
    ),
    curated(
      14,
      "Industrial Process Optimization",
      "Energy Efficiency",
      "Machine Learning",
      "AI optimization of industrial energy consumption and processes",
      0.7,
      0.6,
      &["industrial optimization", "process efficiency", "energy consumption"],
    ),
    curated(
      15,
      "Demand Response Systems",
      "Energy Efficiency",
      "Machine Learning",
      "AI-driven demand response and load shifting programs",
      0.6,
      0.5,
      &["demand response", "load shifting", "peak management"],
    ),
    // Oil & Gas Operations
    curated(
      16,
      "Reservoir Modeling",
      "Oil & Gas Operations",
      "Machine Learning",
      "AI-powered reservoir characterization and production modeling",
      0.8,
      0.7,
      &["reservoir modeling", "production optimization", "geology"],
    ),
    curated(
      17,
      "Predictive Maintenance",
      "Oil & Gas Operations",
      "Predictive Analytics",
      "AI-based predictive maintenance for oil and gas equipment",
      0.7,
      0.6,
      &["predictive maintenance", "equipment monitoring", "downtime reduction"],
    ),
    curated(
      18,
      "Drilling Optimization",
      "Oil & Gas Operations",
      "Machine Learning",
      "AI optimization of drilling operations and well planning",
      0.6,
      0.5,
      &["drilling optimization", "well planning", "operations"],
    ),
    // Nuclear Energy
    curated(
      19,
      "Nuclear Safety Monitoring",
      "Nuclear Energy",
      "Machine Learning",
      "AI-powered nuclear plant safety monitoring and anomaly detection",
      0.8,
      0.7,
      &["nuclear safety", "anomaly detection", "safety monitoring"],
    ),
    curated(
      20,
      "Nuclear Fuel Optimization",
      "Nuclear Energy",
      "Expert Systems",
      "AI optimization of nuclear fuel cycles and reactor operations",
      0.7,
      0.6,
      &["fuel optimization", "reactor operations", "nuclear fuel"],
    ),
    curated(
      21,
      "Nuclear Waste Management",
      "Nuclear Energy",
      "Machine Learning",
      "AI systems for nuclear waste classification and management",
      0.6,
      0.5,
      &["waste management", "nuclear waste", "classification"],
    ),
    // Carbon Capture & Storage
    curated(
      22,
      "Carbon Capture Optimization",
      "Carbon Capture & Storage",
      "Machine Learning",
      "AI optimization of carbon capture processes and efficiency",
      0.7,
      0.6,
      &["carbon capture", "process optimization", "efficiency"],
    ),
    curated(
      23,
      "Storage Site Monitoring",
      "Carbon Capture & Storage",
      "Machine Learning",
      "AI monitoring of carbon storage sites and leakage detection",
      0.6,
      0.5,
      &["storage monitoring", "leakage detection", "carbon storage"],
    ),
    curated(
      24,
      "Carbon Accounting",
      "Carbon Capture & Storage",
      "Predictive Analytics",
      "AI-powered carbon footprint tracking and accounting systems",
      0.8,
      0.7,
      &["carbon accounting", "footprint tracking", "emissions"],
    ),
  ]
}
