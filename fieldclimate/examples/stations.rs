use fieldclimate::{clean, default_client, route, Result};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Keys come from FIELDCLIMATE_PUBLIC_KEY and FIELDCLIMATE_PRIVATE_KEY.
    let client = default_client()?;

    let stations = client.send(route::get_user_stations()).await?;
    for station in stations.as_array().into_iter().flatten() {
        println!("station: {}", clean::station(station));

        // Hourly data of the last day.
        let data = client
            .send(route::get_data_last("normal", station, "hourly", "1d")?)
            .await?;
        println!("data: {data}");
    }

    Ok(())
}
