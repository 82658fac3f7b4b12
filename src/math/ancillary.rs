use crate::Error;

/// The function t(𝜙) of Snyder (1987), eq. (15-9), known in PROJ as
/// `pj_tsfn`: The exponential of the negated isometric latitude, exp(-𝜓),
/// evaluated in a numerically stable way.
///
/// Inputs:
///   (sin 𝜙, cos 𝜙): trigs of geographic latitude
///   e: eccentricity of the ellipsoid
///
/// Here the isometric latitude is defined by
///   𝜓 = asinh(tan 𝜙) - e × atanh(e × sin 𝜙)
pub fn tsfn(sincos: (f64, f64), e: f64) -> f64 {
    let (sinphi, cosphi) = sincos;
    // exp(-asinh(tan 𝜙)) = cos 𝜙 / (1 + sin 𝜙), good for 𝜙 > 0,
    //                    = (1 - sin 𝜙) / cos 𝜙, good for 𝜙 < 0
    let factor = if sinphi > 0. {
        cosphi / (1. + sinphi)
    } else {
        (1. - sinphi) / cosphi
    };
    (e * (e * sinphi).atanh()).exp() * factor
}

/// The function m(𝜙) of Snyder (1987), eq. (14-15), known in PROJ as
/// `pj_msfn`: The radius of the parallel at 𝜙, in units of the semimajor axis.
pub fn msfn(sincos: (f64, f64), es: f64) -> f64 {
    sincos.1 / (1. - sincos.0 * sincos.0 * es).sqrt()
}

/// Invert [tsfn]: Recover the geographic latitude (radians) from
/// t = exp(-𝜓), by Newton iteration on tan 𝜙, following
/// [Karney (2011)](crate::Bibliography::Kar11) as implemented in PROJ's
/// `pj_sinhpsi2tanphi`.
pub fn latitude_from_tsfn(ts: f64, e: f64) -> Result<f64, Error> {
    // Two iterations are usually sufficient
    const MAX_ITER: usize = 5;

    // sinh 𝜓, where 𝜓 is the isometric latitude
    let taup = (1. / ts - ts) / 2.;

    let rooteps = f64::EPSILON.sqrt();
    let tol = rooteps / 10.;
    let tmax = 2. / rooteps;

    let e2m = 1. - e * e;
    let stol = tol * taup.abs().max(1.0);

    // The initial guess. 70 corresponds to chi = 89.18 deg
    let mut tau = if taup.abs() > 70. {
        taup * (e * e.atanh()).exp()
    } else {
        taup / e2m
    };

    // Close enough to a pole to be indistinguishable from it
    if tau.abs() >= tmax {
        return Ok(tau.atan());
    }
    if tau.is_nan() {
        return Err(Error::InvalidInput(format!(
            "no latitude corresponds to t = {ts}"
        )));
    }

    for _ in 0..MAX_ITER {
        let tau1 = (1. + tau * tau).sqrt();
        let sig = (e * (e * tau / tau1).atanh()).sinh();
        let taupa = (1. + sig * sig).sqrt() * tau - sig * tau1;
        let dtau =
            (taup - taupa) * (1. + e2m * (tau * tau)) / (e2m * tau1 * (1. + taupa * taupa).sqrt());
        tau += dtau;

        if dtau.abs() < stol {
            return Ok(tau.atan());
        }
    }
    Err(Error::Convergence {
        operation: "latitude from isometric latitude",
        iterations: MAX_ITER,
    })
}

// ----- Tests ---------------------------------------------------------------------
