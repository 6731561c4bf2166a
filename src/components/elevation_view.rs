use cosmoscope::ViewSnapshot;
use cosmoscope::ZoomState;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ElevationViewProps {
    pub snapshot: ViewSnapshot,
}

/// Static topography image, scaled around its centre.
#[function_component(ElevationView)]
pub fn elevation_view(props: &ElevationViewProps) -> Html {
    let ZoomState::Scale(scale) = props.snapshot.zoom else {
        return html! {};
    };
    let image = props.snapshot.descriptor().elevation;
    let img_style = format!(
        "max-width:100%; max-height:100%; object-fit:contain; transform:scale({scale}); transition:transform 0.2s ease-out;"
    );
    html! {
        <div style="position:absolute; inset:0; display:flex; justify-content:center; align-items:center; background:#000; overflow:hidden;">
            <img src={image.url} alt={image.caption} title={image.caption} style={img_style} />
        </div>
    }
}
